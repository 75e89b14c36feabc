//! Typed responses handed back by the native transport

pub mod document;
pub mod indices;
pub mod search;

pub use document::{
    CountResponse, DeleteByQueryResponse, DeleteResponse, GetField, GetResponse,
    IndexDeleteByQueryResponse, IndexResponse, MultiGetFailure, MultiGetItemResponse,
    MultiGetResponse,
};
pub use indices::{
    AcknowledgedResponse, BroadcastResponse, ClearIndicesCacheResponse, FlushResponse,
    GatewaySnapshotResponse, IndexSegments, IndicesExistsResponse, IndicesSegmentsResponse,
    IndicesStatsResponse, IndicesStatusResponse, OptimizeResponse, RefreshResponse, Segment,
    ShardSegments,
};
pub use search::{SearchHit, SearchHits, SearchResponse};

/// Per-shard error of an operation fanned out across shards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardOperationFailure {
    pub index: Option<String>,
    pub shard_id: i32,
    pub reason: String,
}

/// Shard-level outcome of a broadcast operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardInfo {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
    pub failures: Vec<ShardOperationFailure>,
}

impl ShardInfo {
    pub fn all_successful(total: u32) -> Self {
        Self {
            total,
            successful: total,
            failed: 0,
            failures: Vec::new(),
        }
    }
}

/// Responses that report a shard-level summary
pub trait Broadcast {
    fn shard_info(&self) -> &ShardInfo;
}
