//! Builders for single-document and count operations

use crate::coerce::{shape_name, to_source_map, value_to_string, ToStringArray};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::resolve::{content_type, version_type};
use esnative_model::request::{
    CountRequest, DeleteByQueryRequest, DeleteRequest, GetRequest, IndexRequest, MultiGetRequest,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Index a document.
///
/// Options: `id`, `routing`, `parent`, `timestamp`, `ttl`, `op-type`,
/// `refresh`, `version`, `version-type`, `percolate`, `content-type`.
pub fn index_request<D: Serialize + ?Sized>(
    index: &str,
    mapping_type: &str,
    document: &D,
    opts: Option<&Map<String, Value>>,
) -> Result<IndexRequest> {
    let opts = Options::new(opts);
    let mut req = IndexRequest::new(index, mapping_type);
    req.source = to_source_map("document", document)?;

    if let Some(id) = opts.string("id") {
        req.id = Some(id);
    }
    if let Some(routing) = opts.string("routing") {
        req.routing = Some(routing);
    }
    if let Some(parent) = opts.string("parent") {
        req.parent = Some(parent);
    }
    if let Some(timestamp) = opts.string("timestamp") {
        req.timestamp = Some(timestamp);
    }
    if let Some(ttl) = opts.long("ttl")? {
        req.ttl = Some(ttl);
    }
    if let Some(op_type) = opts.string("op-type") {
        req.set_op_type(&op_type.to_lowercase())?;
    }
    if opts.flag("refresh") {
        req.refresh = true;
    }
    if let Some(version) = opts.long("version")? {
        req.version = Some(version);
    }
    if let Some(vt) = opts.get("version-type") {
        req.version_type = version_type(vt);
    }
    if let Some(percolate) = opts.string("percolate") {
        req.percolate = Some(percolate);
    }
    if let Some(ct) = opts.get("content-type") {
        req.content_type = content_type(ct);
    }

    debug!(
        index = %req.index,
        doc_type = %req.doc_type,
        id = ?req.id,
        "built index request"
    );
    Ok(req)
}

/// Fetch a document. Options: `parent`, `preference`, `routing`, `fields`.
pub fn get_request(
    index: &str,
    mapping_type: &str,
    id: &str,
    opts: Option<&Map<String, Value>>,
) -> Result<GetRequest> {
    let opts = Options::new(opts);
    let mut req = GetRequest::new(index, mapping_type, id);

    if let Some(parent) = opts.string("parent") {
        req.parent = Some(parent);
    }
    if let Some(preference) = opts.string("preference") {
        req.preference = Some(preference);
    }
    if let Some(routing) = opts.string("routing") {
        req.routing = Some(routing);
    }
    if let Some(fields) = opts.strings("fields")? {
        req.fields = Some(fields);
    }

    Ok(req)
}

/// Fetch several documents.
///
/// Each query is a map naming `_index`, `_type` and `_id` (the spellings
/// without underscore are accepted too). Options: `preference`, `refresh`,
/// `realtime`.
pub fn multi_get_request(
    queries: &[Value],
    opts: Option<&Map<String, Value>>,
) -> Result<MultiGetRequest> {
    let opts = Options::new(opts);
    let mut req = MultiGetRequest::new();

    for query in queries {
        let query = match query {
            Value::Object(map) => map,
            other => {
                return Err(Error::invalid(
                    "queries",
                    format!("expected a map per document, got {}", shape_name(other)),
                ))
            }
        };
        req.add(
            triple_part(query, "_index", "index")?,
            triple_part(query, "_type", "type")?,
            triple_part(query, "_id", "id")?,
        );
    }

    if let Some(preference) = opts.string("preference") {
        req.preference = Some(preference);
    }
    if opts.flag("refresh") {
        req.refresh = true;
    }
    if opts.flag("realtime") {
        req.realtime = Some(true);
    }

    debug!(documents = req.items.len(), "built multi-get request");
    Ok(req)
}

fn triple_part(query: &Map<String, Value>, key: &str, alt: &str) -> Result<String> {
    let present = |k: &str| query.get(k).filter(|v| !v.is_null());
    present(key)
        .or_else(|| present(alt))
        .map(value_to_string)
        .ok_or_else(|| Error::MissingArgument(key.to_string()))
}

/// Count matching documents. Options: `query`, `min-score`, `routing`.
pub fn count_request<I, T>(
    indices: &I,
    types: &T,
    opts: Option<&Map<String, Value>>,
) -> Result<CountRequest>
where
    I: ToStringArray + ?Sized,
    T: ToStringArray + ?Sized,
{
    let opts = Options::new(opts);
    let mut req = CountRequest::new(indices.to_string_array()?);
    req.types = types.to_string_array()?;

    if let Some(query) = opts.map("query")? {
        req.query = Some(query.clone());
    }
    if let Some(min_score) = opts.float("min-score")? {
        req.min_score = Some(min_score);
    }
    if let Some(routing) = opts.string("routing") {
        req.routing = Some(routing);
    }

    Ok(req)
}

/// Delete a document.
///
/// Options: `routing`, `refresh`, `version`, `version-type`, `parent`.
pub fn delete_request(
    index: &str,
    mapping_type: &str,
    id: &str,
    opts: Option<&Map<String, Value>>,
) -> Result<DeleteRequest> {
    let opts = Options::new(opts);
    let mut req = DeleteRequest::new(index, mapping_type, id);

    if let Some(routing) = opts.string("routing") {
        req.routing = Some(routing);
    }
    if opts.flag("refresh") {
        req.refresh = true;
    }
    if let Some(version) = opts.long("version")? {
        req.version = Some(version);
    }
    if let Some(vt) = opts.get("version-type") {
        req.version_type = version_type(vt);
    }
    if let Some(parent) = opts.string("parent") {
        req.parent = Some(parent);
    }

    Ok(req)
}

/// Delete every document matching `query`. Options: `routing`.
pub fn delete_by_query_request<I, T, Q>(
    indices: &I,
    types: &T,
    query: &Q,
    opts: Option<&Map<String, Value>>,
) -> Result<DeleteByQueryRequest>
where
    I: ToStringArray + ?Sized,
    T: ToStringArray + ?Sized,
    Q: Serialize + ?Sized,
{
    let opts = Options::new(opts);
    let mut req = DeleteByQueryRequest::new(indices.to_string_array()?);
    req.types = types.to_string_array()?;
    req.query = to_source_map("query", query)?;

    if let Some(routing) = opts.string("routing") {
        req.routing = Some(routing);
    }

    debug!(indices = ?req.indices, "built delete-by-query request");
    Ok(req)
}
