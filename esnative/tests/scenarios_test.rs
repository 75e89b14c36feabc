//! End-to-end marshalling scenarios: options map in, typed request out,
//! typed response in, REST-shaped map out.

use esnative::request::{
    count_request, delete_request, get_request, index_request, multi_get_request, search_request,
    stats_request,
};
use esnative::response::{
    broadcast_response_to_map, delete_response_to_map, get_response_to_map,
    multi_get_response_to_seq, search_response_to_map,
};
use esnative::{content_type, to_settings, version_type};
use esnative_model::request::IndexRequest;
use esnative_model::response::{
    DeleteResponse, GetResponse, MultiGetItemResponse, MultiGetResponse, SearchHit, SearchHits,
    SearchResponse, ShardInfo,
};
use esnative_model::{ContentType, NativeValue, SearchType, Settings, VersionType};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

fn native_source(doc: &Value) -> HashMap<String, NativeValue> {
    match NativeValue::from(doc.clone()) {
        NativeValue::Map(m) => m,
        other => panic!("Expected map, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[test]
fn test_nil_settings_are_the_shared_instance() {
    assert!(Arc::ptr_eq(&to_settings(None), &Settings::empty()));
}

#[test]
fn test_settings_values_become_strings() {
    let input = json!({"number-of-shards": 5});
    let settings = to_settings(input.as_object());
    assert_eq!(settings.get("number-of-shards"), Some("5"));
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn test_index_article_with_id_and_refresh() {
    let opts = json!({"id": "1", "refresh": true});
    let req = index_request(
        "articles",
        "article",
        &json!({"title": "ElasticSearch"}),
        opts.as_object(),
    )
    .unwrap();

    assert_eq!(req.id.as_deref(), Some("1"));
    assert!(req.refresh);
    assert!(req.routing.is_none());
    assert!(req.parent.is_none());
    assert!(req.ttl.is_none());

    let defaults = IndexRequest::new("articles", "article");
    assert_eq!(req.op_type, defaults.op_type);
    assert_eq!(req.version_type, defaults.version_type);
    assert_eq!(req.content_type, defaults.content_type);
}

#[test]
fn test_search_control_keys_stay_out_of_body() {
    let opts = json!({
        "query": {"query_string": {"query": "elastic*"}},
        "search-type": "count",
        "scroll": "1m"
    });
    let req = search_request("articles", "article", opts.as_object()).unwrap();

    assert_eq!(req.search_type, SearchType::Count);
    assert!(req.source.contains_key("query"));
    assert!(!req.source.contains_key("search-type"));
    assert!(!req.source.contains_key("scroll"));
}

#[test]
fn test_one_options_map_serves_many_operations() {
    let opts = json!({
        "routing": "tenant-7",
        "preference": "_local",
        "refresh": true,
        "version-type": "external"
    });
    let opts = opts.as_object();

    assert_eq!(
        get_request("a", "t", "1", opts).unwrap().routing.as_deref(),
        Some("tenant-7")
    );
    assert_eq!(
        count_request("a", "t", opts).unwrap().routing.as_deref(),
        Some("tenant-7")
    );
    let del = delete_request("a", "t", "1", opts).unwrap();
    assert!(del.refresh);
    assert_eq!(del.version_type, VersionType::External);

    let search = search_request("a", "t", opts).unwrap();
    assert_eq!(search.preference.as_deref(), Some("_local"));
    // non-control keys of the search map form the body
    assert!(search.source.contains_key("refresh"));
    assert!(!search.source.contains_key("routing"));

    let mget = multi_get_request(&[], opts).unwrap();
    assert!(mget.refresh);
    assert_eq!(mget.preference.as_deref(), Some("_local"));
}

#[test]
fn test_stats_without_options_requests_all_groups() {
    let req = stats_request(None).unwrap();
    assert!(req.merge && req.flush && req.refresh);
}

#[test]
fn test_enum_resolution_policies() {
    assert_eq!(content_type("application/x-yaml"), ContentType::Json);
    assert_eq!(content_type("SMILE"), ContentType::Smile);
    assert_eq!(version_type("external"), VersionType::External);
    assert_eq!(version_type("sometimes"), VersionType::Internal);
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn test_delete_not_found() {
    let r = DeleteResponse {
        index: "articles".to_string(),
        doc_type: "article".to_string(),
        id: "1".to_string(),
        version: 1,
        not_found: true,
    };
    let m = delete_response_to_map(&r);
    assert_eq!(m["found"], json!(false));
    assert_eq!(m["found?"], json!(false));
    assert_eq!(m["ok"], json!(true));
}

#[test]
fn test_get_round_trip() {
    let doc = json!({
        "title": "ElasticSearch",
        "author": {"name": "kimchy", "roles": ["founder", "dev"]},
        "rating": 4.5,
        "views": 1200,
        "published": true,
        "summary": null
    });
    let r = GetResponse {
        index: "articles".to_string(),
        doc_type: "article".to_string(),
        id: "1".to_string(),
        version: 1,
        exists: true,
        source: Some(native_source(&doc)),
        fields: HashMap::new(),
    };

    let m = get_response_to_map(&r);
    assert_eq!(m["_source"], doc);
    assert_eq!(m["source"], doc);
    assert_eq!(m["_index"], m["index"]);
}

#[test]
fn test_multi_get_sequence_is_ordered_and_lazy() {
    let items: Vec<MultiGetItemResponse> = (1..=3)
        .map(|i| MultiGetItemResponse {
            index: "articles".to_string(),
            doc_type: "article".to_string(),
            id: i.to_string(),
            response: Some(GetResponse::missing("articles", "article", i.to_string())),
            failure: None,
        })
        .collect();
    let r = MultiGetResponse { items };

    let mut seq = multi_get_response_to_seq(&r);
    assert_eq!(seq.next().unwrap()["_id"], json!("1"));
    let rest: Vec<Value> = seq.collect();
    assert_eq!(rest.len(), 2);
    assert_eq!(rest[1]["_id"], json!("3"));
}

#[test]
fn test_search_response_rest_shape() {
    let doc = json!({"title": "ElasticSearch", "tags": ["search", "lucene"]});
    let r = SearchResponse {
        took_ms: 3,
        timed_out: false,
        scroll_id: None,
        shards: ShardInfo::all_successful(5),
        hits: SearchHits {
            total: 1,
            max_score: Some(1.0),
            hits: vec![SearchHit {
                index: "articles".to_string(),
                doc_type: "article".to_string(),
                id: "1".to_string(),
                score: 1.0,
                version: 1,
                source: Some(native_source(&doc)),
                fields: HashMap::new(),
            }],
        },
    };

    let m = search_response_to_map(&r);
    assert_eq!(m["hits"]["hits"][0]["_source"], doc);
    assert_eq!(m["_shards"]["total"], json!(5));
    assert!(m.get("facets").is_none());

    // search responses also carry a broadcast shard summary
    assert_eq!(broadcast_response_to_map(&r)["_shards"]["failures"], json!([]));
}
