//! Search response normalizer
//!
//! Facets and suggestions are not carried over.

use super::shard_counts;
use crate::convert::{optional_map_to_value, to_value};
use esnative_model::response::{SearchHit, SearchResponse};
use serde_json::{json, Map, Value};

pub fn search_response_to_map(r: &SearchResponse) -> Value {
    let hits: Vec<Value> = r.hits.hits.iter().map(search_hit_to_map).collect();
    json!({
        "took": r.took_ms,
        "timed_out": r.timed_out,
        "_scroll_id": r.scroll_id,
        "_shards": shard_counts(&r.shards),
        "hits": {
            "total": r.hits.total,
            "max_score": r.hits.max_score,
            "hits": hits,
        },
    })
}

/// `_source` is `null` when the hit carries no source
pub fn search_hit_to_map(hit: &SearchHit) -> Value {
    let mut map = Map::new();
    map.insert("_index".to_string(), json!(hit.index));
    map.insert("_type".to_string(), json!(hit.doc_type));
    map.insert("_id".to_string(), json!(hit.id));
    map.insert("_score".to_string(), json!(hit.score));
    map.insert("_version".to_string(), json!(hit.version));
    map.insert("_source".to_string(), optional_map_to_value(hit.source.as_ref()));

    if !hit.fields.is_empty() {
        let fields: Map<String, Value> = hit
            .fields
            .iter()
            .map(|(name, values)| {
                (
                    name.clone(),
                    Value::Array(values.iter().map(to_value).collect()),
                )
            })
            .collect();
        map.insert("fields".to_string(), Value::Object(fields));
    }

    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use esnative_model::response::{SearchHits, ShardInfo};
    use esnative_model::NativeValue;
    use std::collections::HashMap;

    fn hit(id: &str, score: f32, doc: Option<Value>) -> SearchHit {
        SearchHit {
            index: "articles".to_string(),
            doc_type: "article".to_string(),
            id: id.to_string(),
            score,
            version: -1,
            source: doc.and_then(|d| NativeValue::from(d).as_map().cloned()),
            fields: HashMap::new(),
        }
    }

    #[test]
    fn test_search_response_shape() {
        let r = SearchResponse {
            took_ms: 12,
            timed_out: false,
            scroll_id: Some("c2Nhbjs".to_string()),
            shards: ShardInfo::all_successful(5),
            hits: SearchHits {
                total: 2,
                max_score: Some(1.5),
                hits: vec![
                    hit("1", 1.5, Some(json!({"title": "one", "tags": ["a"]}))),
                    hit("2", 0.5, Some(json!({"title": "two"}))),
                ],
            },
        };
        let m = search_response_to_map(&r);

        assert_eq!(m["took"], json!(12));
        assert_eq!(m["timed_out"], json!(false));
        assert_eq!(m["_scroll_id"], json!("c2Nhbjs"));
        assert_eq!(
            m["_shards"],
            json!({"total": 5, "successful": 5, "failed": 0})
        );
        assert_eq!(m["hits"]["total"], json!(2));
        assert_eq!(m["hits"]["max_score"], json!(1.5));

        let hits = m["hits"]["hits"].as_array().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0]["_id"], json!("1"));
        assert_eq!(hits[0]["_score"], json!(1.5));
        assert_eq!(hits[0]["_source"], json!({"title": "one", "tags": ["a"]}));
        assert_eq!(hits[1]["_index"], json!("articles"));
        assert_eq!(hits[1]["_type"], json!("article"));
        assert_eq!(hits[1]["_version"], json!(-1));
        assert!(hits[0].get("fields").is_none());
    }

    #[test]
    fn test_empty_search_response() {
        let r = SearchResponse {
            took_ms: 1,
            timed_out: true,
            scroll_id: None,
            shards: ShardInfo::default(),
            hits: SearchHits::default(),
        };
        let m = search_response_to_map(&r);
        assert_eq!(m["_scroll_id"], Value::Null);
        assert_eq!(m["hits"]["max_score"], Value::Null);
        assert_eq!(m["hits"]["hits"], json!([]));
        assert_eq!(m["timed_out"], json!(true));
        assert!(m.get("facets").is_none());
    }

    #[test]
    fn test_hit_without_source_and_with_fields() {
        let mut h = hit("1", 1.0, None);
        h.fields.insert(
            "title".to_string(),
            vec![NativeValue::from("ElasticSearch")],
        );
        let m = search_hit_to_map(&h);
        assert_eq!(m["_source"], Value::Null);
        assert_eq!(m["fields"], json!({"title": ["ElasticSearch"]}));
    }
}
