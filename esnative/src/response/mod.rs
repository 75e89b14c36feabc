//! Response normalizers
//!
//! Typed responses become `serde_json` values shaped like the REST API's
//! JSON. Most document-level fields appear twice, once under a plain key
//! (`id`) and once underscore-prefixed (`_id`), so callers written against
//! either shape keep working. Shard failures and not-found outcomes are
//! data in the returned map, never errors.

mod document;
mod indices;
mod search;

pub use document::{
    count_response_to_map, delete_by_query_response_to_map, delete_response_to_map,
    get_response_to_map, index_response_to_map, multi_get_item_to_map, multi_get_response_to_seq,
};
pub use indices::{
    acknowledged_response_to_map, broadcast_response_to_map, indices_exists_response_to_map,
    segments_response_to_map,
};
pub use search::{search_hit_to_map, search_response_to_map};

use esnative_model::response::{ShardInfo, ShardOperationFailure};
use serde_json::{json, Value};

/// `{total, successful, failed}`
pub(crate) fn shard_counts(info: &ShardInfo) -> Value {
    json!({
        "total": info.total,
        "successful": info.successful,
        "failed": info.failed,
    })
}

/// `{total, successful, failed, failures: [...]}`
pub(crate) fn shard_counts_with_failures(info: &ShardInfo) -> Value {
    let failures: Vec<Value> = info.failures.iter().map(shard_failure_to_map).collect();
    json!({
        "total": info.total,
        "successful": info.successful,
        "failed": info.failed,
        "failures": failures,
    })
}

fn shard_failure_to_map(failure: &ShardOperationFailure) -> Value {
    json!({
        "index": failure.index,
        "shard-id": failure.shard_id,
        "reason": failure.reason,
    })
}
