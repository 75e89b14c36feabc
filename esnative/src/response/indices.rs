//! Normalizers for index administration responses

use super::{shard_counts, shard_counts_with_failures};
use esnative_model::response::{
    AcknowledgedResponse, Broadcast, IndexSegments, IndicesExistsResponse,
    IndicesSegmentsResponse, Segment, ShardSegments,
};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Shard summary of optimize, flush, refresh, snapshot, clear-cache, stats
/// and status calls, one entry per shard-level failure
pub fn broadcast_response_to_map<R: Broadcast + ?Sized>(r: &R) -> Value {
    json!({
        "_shards": shard_counts_with_failures(r.shard_info()),
    })
}

pub fn acknowledged_response_to_map(r: &AcknowledgedResponse) -> Value {
    json!({
        "ok": true,
        "acknowledged": r.acknowledged,
    })
}

pub fn indices_exists_response_to_map(r: &IndicesExistsResponse) -> Value {
    json!({
        "exists": r.exists,
    })
}

/// Segment summary in the shape of the REST `_segments` endpoint
pub fn segments_response_to_map(r: &IndicesSegmentsResponse) -> Value {
    let indices: Map<String, Value> = r
        .indices
        .iter()
        .map(|(name, index)| (name.clone(), index_segments_to_map(index)))
        .collect();
    json!({
        "_shards": shard_counts(&r.shards),
        "indices": indices,
    })
}

fn index_segments_to_map(index: &IndexSegments) -> Value {
    // shard copies grouped under their shard id
    let mut shards: BTreeMap<String, Vec<Value>> = BTreeMap::new();
    for copy in &index.shards {
        shards
            .entry(copy.shard_id.to_string())
            .or_default()
            .push(shard_segments_to_map(copy));
    }
    json!({
        "shards": shards,
    })
}

fn shard_segments_to_map(shard: &ShardSegments) -> Value {
    let segments: Map<String, Value> = shard
        .segments
        .iter()
        .map(|segment| (segment.name.clone(), segment_to_map(segment)))
        .collect();
    json!({
        "routing": {
            "primary": shard.primary,
        },
        "num_committed_segments": shard.num_committed_segments(),
        "num_search_segments": shard.num_search_segments(),
        "segments": segments,
    })
}

fn segment_to_map(segment: &Segment) -> Value {
    json!({
        "generation": segment.generation,
        "num_docs": segment.num_docs,
        "deleted_docs": segment.deleted_docs,
        "size_in_bytes": segment.size_in_bytes,
        "committed": segment.committed,
        "search": segment.search,
        "compound": segment.compound,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use esnative_model::response::{
        BroadcastResponse, CountResponse, ShardInfo, ShardOperationFailure,
    };
    use std::collections::HashMap;

    #[test]
    fn test_broadcast_response_with_failures() {
        let r = BroadcastResponse {
            shards: ShardInfo {
                total: 10,
                successful: 8,
                failed: 2,
                failures: vec![
                    ShardOperationFailure {
                        index: Some("articles".to_string()),
                        shard_id: 3,
                        reason: "IllegalIndexShardStateException".to_string(),
                    },
                    ShardOperationFailure {
                        index: None,
                        shard_id: 4,
                        reason: "timeout".to_string(),
                    },
                ],
            },
        };
        assert_eq!(
            broadcast_response_to_map(&r),
            json!({
                "_shards": {
                    "total": 10,
                    "successful": 8,
                    "failed": 2,
                    "failures": [
                        {"index": "articles", "shard-id": 3, "reason": "IllegalIndexShardStateException"},
                        {"index": null, "shard-id": 4, "reason": "timeout"}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_broadcast_without_failures_has_empty_list() {
        let r = CountResponse {
            count: 0,
            shards: ShardInfo::all_successful(1),
        };
        let m = broadcast_response_to_map(&r);
        assert_eq!(m["_shards"]["failures"], json!([]));
        assert_eq!(m["_shards"]["successful"], json!(1));
    }

    #[test]
    fn test_acknowledged_and_exists() {
        assert_eq!(
            acknowledged_response_to_map(&AcknowledgedResponse { acknowledged: true }),
            json!({"ok": true, "acknowledged": true})
        );
        assert_eq!(
            indices_exists_response_to_map(&IndicesExistsResponse { exists: false }),
            json!({"exists": false})
        );
    }

    #[test]
    fn test_segments_response() {
        let segment = |name: &str, committed: bool| Segment {
            name: name.to_string(),
            generation: 1,
            committed,
            search: true,
            num_docs: 10,
            deleted_docs: 1,
            size_in_bytes: 2048,
            compound: true,
        };
        let mut indices = HashMap::new();
        indices.insert(
            "articles".to_string(),
            IndexSegments {
                index: "articles".to_string(),
                shards: vec![
                    ShardSegments {
                        shard_id: 0,
                        primary: true,
                        segments: vec![segment("_0", true), segment("_1", false)],
                    },
                    ShardSegments {
                        shard_id: 0,
                        primary: false,
                        segments: vec![segment("_0", true)],
                    },
                ],
            },
        );
        let r = IndicesSegmentsResponse {
            shards: ShardInfo::all_successful(2),
            indices,
        };

        let m = segments_response_to_map(&r);
        let copies = m["indices"]["articles"]["shards"]["0"].as_array().unwrap();
        assert_eq!(copies.len(), 2);
        assert_eq!(copies[0]["routing"]["primary"], json!(true));
        assert_eq!(copies[0]["num_committed_segments"], json!(1));
        assert_eq!(copies[0]["num_search_segments"], json!(2));
        assert_eq!(copies[0]["segments"]["_1"]["committed"], json!(false));
        assert_eq!(copies[1]["segments"]["_0"]["size_in_bytes"], json!(2048));
        assert_eq!(m["_shards"]["total"], json!(2));
    }
}
