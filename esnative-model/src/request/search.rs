//! Search and scroll requests

use crate::types::{SearchType, TimeValue};
use serde_json::{Map, Value};

/// Keep-alive window of a scrolling search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    pub keep_alive: TimeValue,
}

impl Scroll {
    pub fn new(keep_alive: TimeValue) -> Self {
        Self { keep_alive }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub indices: Vec<String>,
    pub types: Vec<String>,
    pub search_type: SearchType,
    pub scroll: Option<Scroll>,
    pub routing: Option<String>,
    pub preference: Option<String>,
    /// Query DSL body sent verbatim to the server
    pub source: Map<String, Value>,
}

impl SearchRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            types: Vec::new(),
            search_type: SearchType::QueryThenFetch,
            scroll: None,
            routing: None,
            preference: None,
            source: Map::new(),
        }
    }
}

/// Continue a scrolling search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchScrollRequest {
    pub scroll_id: String,
    pub scroll: Option<Scroll>,
}

impl SearchScrollRequest {
    pub fn new(scroll_id: impl Into<String>) -> Self {
        Self {
            scroll_id: scroll_id.into(),
            scroll: None,
        }
    }
}
