//! Index administration responses

use super::{Broadcast, ShardInfo};
use std::collections::HashMap;

/// Shard summary shared by every broadcast administration call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastResponse {
    pub shards: ShardInfo,
}

impl Broadcast for BroadcastResponse {
    fn shard_info(&self) -> &ShardInfo {
        &self.shards
    }
}

pub type OptimizeResponse = BroadcastResponse;
pub type FlushResponse = BroadcastResponse;
pub type RefreshResponse = BroadcastResponse;
pub type GatewaySnapshotResponse = BroadcastResponse;
pub type ClearIndicesCacheResponse = BroadcastResponse;
pub type IndicesStatsResponse = BroadcastResponse;
pub type IndicesStatusResponse = BroadcastResponse;

/// Outcome of calls the master acknowledges (create/delete index, aliases, templates...)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicesExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub generation: i64,
    pub committed: bool,
    pub search: bool,
    pub num_docs: u64,
    pub deleted_docs: u64,
    pub size_in_bytes: u64,
    pub compound: bool,
}

/// Segments of one shard copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSegments {
    pub shard_id: i32,
    pub primary: bool,
    pub segments: Vec<Segment>,
}

impl ShardSegments {
    pub fn num_committed_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.committed).count()
    }

    pub fn num_search_segments(&self) -> usize {
        self.segments.iter().filter(|s| s.search).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSegments {
    pub index: String,
    /// Every shard copy, primaries and replicas alike
    pub shards: Vec<ShardSegments>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicesSegmentsResponse {
    pub shards: ShardInfo,
    pub indices: HashMap<String, IndexSegments>,
}

impl Broadcast for IndicesSegmentsResponse {
    fn shard_info(&self) -> &ShardInfo {
        &self.shards
    }
}
