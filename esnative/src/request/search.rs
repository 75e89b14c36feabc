//! Builders for search and scroll

use crate::coerce::{value_to_string, ToStringArray};
use crate::error::Result;
use crate::options::Options;
use esnative_model::request::{Scroll, SearchRequest, SearchScrollRequest};
use esnative_model::SearchType;
use serde_json::{Map, Value};
use tracing::debug;

/// Keys of the search options map that steer the request rather than
/// belonging to the query body
pub const SEARCH_CONTROL_KEYS: [&str; 5] =
    ["search-type", "search_type", "scroll", "routing", "preference"];

/// Search `indices` for documents of `types`.
///
/// The options map doubles as the request body: `search-type` (or
/// `search_type`), `scroll`, `routing` and `preference` configure the
/// request and are stripped; everything else (`query`, `from`, `size`,
/// `sort`, `facets`...) is sent as the query body.
pub fn search_request<I, T>(
    indices: &I,
    types: &T,
    opts: Option<&Map<String, Value>>,
) -> Result<SearchRequest>
where
    I: ToStringArray + ?Sized,
    T: ToStringArray + ?Sized,
{
    let options = Options::new(opts);
    let mut req = SearchRequest::new(indices.to_string_array()?);
    req.types = types.to_string_array()?;

    if let Some(search_type) = options.first_of(&["search-type", "search_type"]) {
        req.search_type = value_to_string(search_type).parse::<SearchType>()?;
    }
    if let Some(keep_alive) = options.time_value("scroll")? {
        req.scroll = Some(Scroll::new(keep_alive));
    }
    if let Some(routing) = options.string("routing") {
        req.routing = Some(routing);
    }
    if let Some(preference) = options.string("preference") {
        req.preference = Some(preference);
    }

    if let Some(opts) = opts {
        req.source = opts
            .iter()
            .filter(|(key, _)| !SEARCH_CONTROL_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
    }

    debug!(
        indices = ?req.indices,
        search_type = %req.search_type,
        "built search request"
    );
    Ok(req)
}

/// Fetch the next batch of a scrolling search. Options: `scroll`.
pub fn scroll_request(
    scroll_id: &str,
    opts: Option<&Map<String, Value>>,
) -> Result<SearchScrollRequest> {
    let opts = Options::new(opts);
    let mut req = SearchScrollRequest::new(scroll_id);

    if let Some(keep_alive) = opts.time_value("scroll")? {
        req.scroll = Some(Scroll::new(keep_alive));
    }

    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use esnative_model::TimeValue;
    use serde_json::json;

    #[test]
    fn test_control_keys_do_not_leak_into_body() {
        let opts = json!({
            "query": {"match_all": {}},
            "search-type": "count",
            "scroll": "1m"
        });
        let req = search_request("articles", "article", opts.as_object()).unwrap();

        assert_eq!(req.search_type, SearchType::Count);
        assert_eq!(req.scroll, Some(Scroll::new(TimeValue::from_secs(60))));
        assert!(req.source.contains_key("query"));
        assert!(!req.source.contains_key("search-type"));
        assert!(!req.source.contains_key("scroll"));
        assert_eq!(req.source.len(), 1);
    }

    #[test]
    fn test_all_control_keys_are_stripped() {
        let opts = json!({
            "query": {"term": {"tag": "rust"}},
            "size": 10,
            "search_type": "scan",
            "routing": "r",
            "preference": "_local"
        });
        let req = search_request(&["a", "b"], &json!([]), opts.as_object()).unwrap();

        assert_eq!(req.indices, vec!["a", "b"]);
        assert!(req.types.is_empty());
        assert_eq!(req.search_type, SearchType::Scan);
        assert_eq!(req.routing.as_deref(), Some("r"));
        assert_eq!(req.preference.as_deref(), Some("_local"));
        assert_eq!(
            Value::Object(req.source),
            json!({"query": {"term": {"tag": "rust"}}, "size": 10})
        );
    }

    #[test]
    fn test_hyphenated_search_type_wins() {
        let opts = json!({"search-type": "query_and_fetch", "search_type": "count"});
        let req = search_request("a", "t", opts.as_object()).unwrap();
        assert_eq!(req.search_type, SearchType::QueryAndFetch);
    }

    #[test]
    fn test_falsy_hyphenated_search_type_falls_back() {
        let opts = json!({"search-type": false, "search_type": "dfs_query_then_fetch"});
        let req = search_request("a", "t", opts.as_object()).unwrap();
        assert_eq!(req.search_type, SearchType::DfsQueryThenFetch);
    }

    #[test]
    fn test_unknown_search_type_fails() {
        let opts = json!({"search-type": "fastest"});
        let err = search_request("a", "t", opts.as_object()).unwrap_err();
        assert!(matches!(err, Error::Native(_)));
    }

    #[test]
    fn test_search_request_defaults() {
        let req = search_request("a", "t", None).unwrap();
        assert_eq!(req.search_type, SearchType::QueryThenFetch);
        assert!(req.scroll.is_none());
        assert!(req.routing.is_none());
        assert!(req.preference.is_none());
        assert!(req.source.is_empty());
    }

    #[test]
    fn test_scroll_request() {
        let opts = json!({"scroll": "30s"});
        let req = scroll_request("c2Nhbjs2OzM0NDg1ODpzRlBLc0FXNlNyNm", opts.as_object()).unwrap();
        assert_eq!(req.scroll_id, "c2Nhbjs2OzM0NDg1ODpzRlBLc0FXNlNyNm");
        assert_eq!(req.scroll, Some(Scroll::new(TimeValue::from_secs(30))));

        let plain = scroll_request("abc", None).unwrap();
        assert!(plain.scroll.is_none());
    }
}
