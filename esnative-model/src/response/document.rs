//! Single-document and document-count responses

use super::{Broadcast, ShardInfo};
use crate::value::NativeValue;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexResponse {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub version: i64,
    /// Percolator queries matched by the indexed document
    pub matches: Option<Vec<String>>,
}

/// A stored field returned by a get
#[derive(Debug, Clone, PartialEq)]
pub struct GetField {
    pub name: String,
    pub values: Vec<NativeValue>,
}

impl GetField {
    pub fn value(&self) -> Option<&NativeValue> {
        self.values.first()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GetResponse {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    /// `-1` when the document does not exist
    pub version: i64,
    pub exists: bool,
    pub source: Option<HashMap<String, NativeValue>>,
    pub fields: HashMap<String, GetField>,
}

impl GetResponse {
    pub fn missing(
        index: impl Into<String>,
        doc_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            doc_type: doc_type.into(),
            id: id.into(),
            version: -1,
            exists: false,
            source: None,
            fields: HashMap::new(),
        }
    }

    pub fn is_source_empty(&self) -> bool {
        self.source.as_ref().map_or(true, HashMap::is_empty)
    }
}

/// Failure of a single multi-get item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiGetFailure {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiGetItemResponse {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub response: Option<GetResponse>,
    pub failure: Option<MultiGetFailure>,
}

impl MultiGetItemResponse {
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Items appear in request order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiGetResponse {
    pub items: Vec<MultiGetItemResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountResponse {
    pub count: u64,
    pub shards: ShardInfo,
}

impl Broadcast for CountResponse {
    fn shard_info(&self) -> &ShardInfo {
        &self.shards
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub version: i64,
    pub not_found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDeleteByQueryResponse {
    pub index: String,
    pub shards: ShardInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteByQueryResponse {
    pub indices: HashMap<String, IndexDeleteByQueryResponse>,
}
