//! Search responses

use super::{Broadcast, ShardInfo};
use crate::value::NativeValue;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub index: String,
    pub doc_type: String,
    pub id: String,
    pub score: f32,
    /// `-1` unless versions were requested
    pub version: i64,
    pub source: Option<HashMap<String, NativeValue>>,
    pub fields: HashMap<String, Vec<NativeValue>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    pub total: u64,
    /// `None` when no hit was scored
    pub max_score: Option<f32>,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub took_ms: u64,
    pub timed_out: bool,
    pub scroll_id: Option<String>,
    pub shards: ShardInfo,
    pub hits: SearchHits,
}

impl Broadcast for SearchResponse {
    fn shard_info(&self) -> &ShardInfo {
        &self.shards
    }
}
