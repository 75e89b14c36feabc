//! Normalizers for single-document and count responses

use super::shard_counts;
use crate::convert::{to_map, to_value};
use esnative_model::response::{
    CountResponse, DeleteByQueryResponse, DeleteResponse, GetField, GetResponse, IndexResponse,
    MultiGetItemResponse, MultiGetResponse,
};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

pub fn index_response_to_map(r: &IndexResponse) -> Value {
    json!({
        "index": r.index,
        "_index": r.index,
        "id": r.id,
        "_id": r.id,
        "type": r.doc_type,
        "_type": r.doc_type,
        "version": r.version,
        "_version": r.version,
        "matches": r.matches,
    })
}

/// A missing source yields an empty map
pub fn get_response_to_map(r: &GetResponse) -> Value {
    let source = source_or_empty(r.source.as_ref());
    json!({
        "exists?": r.exists,
        "exists": r.exists,
        "index": r.index,
        "_index": r.index,
        "type": r.doc_type,
        "_type": r.doc_type,
        "id": r.id,
        "_id": r.id,
        "version": r.version,
        "_version": r.version,
        "empty?": r.is_source_empty(),
        "source": source,
        "_source": source,
        "fields": fields_to_map(&r.fields),
    })
}

fn source_or_empty(source: Option<&HashMap<String, esnative_model::NativeValue>>) -> Value {
    Value::Object(source.map(to_map).unwrap_or_default())
}

/// Single-valued fields map to their value, multi-valued ones to a sequence
fn fields_to_map(fields: &HashMap<String, GetField>) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|(name, field)| {
            let value = match field.values.as_slice() {
                [] => Value::Null,
                [single] => to_value(single),
                many => Value::Array(many.iter().map(to_value).collect()),
            };
            (name.clone(), value)
        })
        .collect();
    Value::Object(map)
}

pub fn multi_get_item_to_map(item: &MultiGetItemResponse) -> Value {
    if let Some(failure) = &item.failure {
        return json!({
            "_index": item.index,
            "_type": item.doc_type,
            "_id": item.id,
            "exists": false,
            "error": failure.message,
        });
    }

    match &item.response {
        Some(r) => json!({
            "exists": r.exists,
            "_index": r.index,
            "_type": r.doc_type,
            "_id": r.id,
            "_version": r.version,
            "_source": source_or_empty(r.source.as_ref()),
        }),
        None => json!({
            "exists": false,
            "_index": item.index,
            "_type": item.doc_type,
            "_id": item.id,
            "_version": -1,
            "_source": {},
        }),
    }
}

/// One map per requested document, in request order. Converted lazily.
pub fn multi_get_response_to_seq(r: &MultiGetResponse) -> impl Iterator<Item = Value> + '_ {
    r.items.iter().map(multi_get_item_to_map)
}

pub fn count_response_to_map(r: &CountResponse) -> Value {
    json!({
        "count": r.count,
        "_shards": shard_counts(&r.shards),
    })
}

/// `found` is the negation of the native not-found flag. `ok` is always
/// true: a failed call never produces a response.
pub fn delete_response_to_map(r: &DeleteResponse) -> Value {
    let found = !r.not_found;
    json!({
        "ok": true,
        "found": found,
        "found?": found,
        "index": r.index,
        "_index": r.index,
        "type": r.doc_type,
        "_type": r.doc_type,
        "id": r.id,
        "_id": r.id,
        "version": r.version,
        "_version": r.version,
    })
}

pub fn delete_by_query_response_to_map(r: &DeleteByQueryResponse) -> Value {
    let indices: Map<String, Value> = r
        .indices
        .iter()
        .map(|(name, index)| (name.clone(), json!({"_shards": shard_counts(&index.shards)})))
        .collect();
    json!({
        "ok": true,
        "_indices": indices,
    })
}
