//! Single-document and document-count requests

use crate::types::{ContentType, OpType, VersionType};
use crate::Result;
use serde_json::{Map, Value};

/// Index (create or replace) a document
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRequest {
    pub index: String,
    pub doc_type: String,
    pub id: Option<String>,
    pub routing: Option<String>,
    pub parent: Option<String>,
    pub timestamp: Option<String>,
    /// Time to live in milliseconds
    pub ttl: Option<i64>,
    pub op_type: OpType,
    pub refresh: bool,
    pub version: Option<i64>,
    pub version_type: VersionType,
    pub percolate: Option<String>,
    pub content_type: ContentType,
    pub source: Map<String, Value>,
}

impl IndexRequest {
    pub fn new(index: impl Into<String>, doc_type: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            doc_type: doc_type.into(),
            id: None,
            routing: None,
            parent: None,
            timestamp: None,
            ttl: None,
            op_type: OpType::Index,
            refresh: false,
            version: None,
            version_type: VersionType::Internal,
            percolate: None,
            content_type: ContentType::Json,
            source: Map::new(),
        }
    }

    /// Sets the operation type from its wire name. Case-sensitive.
    pub fn set_op_type(&mut self, op_type: &str) -> Result<&mut Self> {
        self.op_type = op_type.parse()?;
        Ok(self)
    }
}

/// Fetch one document by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub parent: Option<String>,
    pub preference: Option<String>,
    pub routing: Option<String>,
    pub fields: Option<Vec<String>>,
}

impl GetRequest {
    pub fn new(
        index: impl Into<String>,
        doc_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            doc_type: doc_type.into(),
            id: id.into(),
            parent: None,
            preference: None,
            routing: None,
            fields: None,
        }
    }
}

/// One (index, type, id) triple of a multi-get
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiGetItem {
    pub index: String,
    pub doc_type: String,
    pub id: String,
}

/// Fetch several documents in one round trip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiGetRequest {
    pub items: Vec<MultiGetItem>,
    pub preference: Option<String>,
    pub refresh: bool,
    /// `None` keeps the server default (realtime on)
    pub realtime: Option<bool>,
}

impl MultiGetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        index: impl Into<String>,
        doc_type: impl Into<String>,
        id: impl Into<String>,
    ) -> &mut Self {
        self.items.push(MultiGetItem {
            index: index.into(),
            doc_type: doc_type.into(),
            id: id.into(),
        });
        self
    }
}

/// Count documents matching a query
#[derive(Debug, Clone, PartialEq)]
pub struct CountRequest {
    pub indices: Vec<String>,
    pub types: Vec<String>,
    pub query: Option<Map<String, Value>>,
    pub min_score: Option<f32>,
    pub routing: Option<String>,
}

impl CountRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            types: Vec::new(),
            query: None,
            min_score: None,
            routing: None,
        }
    }
}

/// Delete one document by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub routing: Option<String>,
    pub refresh: bool,
    pub version: Option<i64>,
    pub version_type: VersionType,
    pub parent: Option<String>,
}

impl DeleteRequest {
    pub fn new(
        index: impl Into<String>,
        doc_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            doc_type: doc_type.into(),
            id: id.into(),
            routing: None,
            refresh: false,
            version: None,
            version_type: VersionType::Internal,
            parent: None,
        }
    }
}

/// Delete every document matching a query
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteByQueryRequest {
    pub indices: Vec<String>,
    pub types: Vec<String>,
    pub query: Map<String, Value>,
    pub routing: Option<String>,
}

impl DeleteByQueryRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            types: Vec::new(),
            query: Map::new(),
            routing: None,
        }
    }
}
