//! Typed requests accepted by the native transport
//!
//! Each constructor takes the required positional parts of the request and
//! leaves every optional field at the native default.

pub mod document;
pub mod indices;
pub mod search;

pub use document::{
    CountRequest, DeleteByQueryRequest, DeleteRequest, GetRequest, IndexRequest, MultiGetItem,
    MultiGetRequest,
};
pub use indices::{
    AliasAction, ClearIndicesCacheRequest, CloseIndexRequest, CreateIndexRequest,
    DeleteIndexRequest, DeleteIndexTemplateRequest, DeleteMappingRequest, FlushRequest,
    GatewaySnapshotRequest, IndicesAliasesRequest, IndicesExistsRequest, IndicesSegmentsRequest,
    IndicesStatsRequest, IndicesStatusRequest, OpenIndexRequest, OptimizeRequest,
    PutIndexTemplateRequest, PutMappingRequest, RefreshRequest, UpdateSettingsRequest,
};
pub use search::{Scroll, SearchRequest, SearchScrollRequest};
