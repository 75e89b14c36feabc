//! Builders for index administration

use crate::coerce::{shape_name, to_source_map, value_to_string, ToStringArray};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::settings::to_settings;
use esnative_model::request::{
    ClearIndicesCacheRequest, CloseIndexRequest, CreateIndexRequest, DeleteIndexRequest,
    DeleteIndexTemplateRequest, DeleteMappingRequest, FlushRequest, GatewaySnapshotRequest,
    IndicesAliasesRequest, IndicesExistsRequest, IndicesSegmentsRequest, IndicesStatsRequest,
    IndicesStatusRequest, OpenIndexRequest, OptimizeRequest, PutIndexTemplateRequest,
    PutMappingRequest, RefreshRequest, UpdateSettingsRequest,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Create an index. Options: `settings`, `mappings` (type name to mapping).
pub fn create_index_request(
    index: &str,
    opts: Option<&Map<String, Value>>,
) -> Result<CreateIndexRequest> {
    let opts = Options::new(opts);
    let mut req = CreateIndexRequest::new(index);

    if let Some(settings) = opts.map("settings")? {
        req.settings = to_settings(Some(settings));
    }
    if let Some(mappings) = opts.map("mappings")? {
        req.mappings = mapping_bodies(mappings)?;
    }

    debug!(index = %req.index, mappings = req.mappings.len(), "built create-index request");
    Ok(req)
}

fn mapping_bodies(mappings: &Map<String, Value>) -> Result<BTreeMap<String, Map<String, Value>>> {
    mappings
        .iter()
        .map(|(mapping_type, body)| -> Result<(String, Map<String, Value>)> {
            Ok((mapping_type.clone(), to_source_map(mapping_type, body)?))
        })
        .collect()
}

pub fn delete_index_request<I: ToStringArray + ?Sized>(indices: &I) -> Result<DeleteIndexRequest> {
    Ok(DeleteIndexRequest::new(indices.to_string_array()?))
}

pub fn open_index_request(index: &str) -> OpenIndexRequest {
    OpenIndexRequest::new(index)
}

pub fn close_index_request(index: &str) -> CloseIndexRequest {
    CloseIndexRequest::new(index)
}

pub fn indices_exists_request<I: ToStringArray + ?Sized>(
    indices: &I,
) -> Result<IndicesExistsRequest> {
    Ok(IndicesExistsRequest::new(indices.to_string_array()?))
}

/// Replace dynamic settings of `indices`
pub fn update_settings_request<I: ToStringArray + ?Sized>(
    indices: &I,
    settings: &Map<String, Value>,
) -> Result<UpdateSettingsRequest> {
    let mut req = UpdateSettingsRequest::new(indices.to_string_array()?);
    req.settings = to_settings(Some(settings));
    Ok(req)
}

/// Options: `wait-for-merge`, `max-num-segments`, `only-expunge-deletes`,
/// `flush`, `refresh`.
pub fn optimize_request<I: ToStringArray + ?Sized>(
    indices: &I,
    opts: Option<&Map<String, Value>>,
) -> Result<OptimizeRequest> {
    let opts = Options::new(opts);
    let mut req = OptimizeRequest::new(indices.to_string_array()?);

    if opts.flag("wait-for-merge") {
        req.wait_for_merge = true;
    }
    if let Some(n) = opts.int("max-num-segments")? {
        req.max_num_segments = n;
    }
    if opts.flag("only-expunge-deletes") {
        req.only_expunge_deletes = true;
    }
    if opts.flag("flush") {
        req.flush = true;
    }
    if opts.flag("refresh") {
        req.refresh = true;
    }

    Ok(req)
}

/// Options: `refresh`, `force`, `full`.
pub fn flush_request<I: ToStringArray + ?Sized>(
    indices: &I,
    opts: Option<&Map<String, Value>>,
) -> Result<FlushRequest> {
    let opts = Options::new(opts);
    let mut req = FlushRequest::new(indices.to_string_array()?);

    if opts.flag("refresh") {
        req.refresh = true;
    }
    if opts.flag("force") {
        req.force = true;
    }
    if opts.flag("full") {
        req.full = true;
    }

    Ok(req)
}

pub fn refresh_request<I: ToStringArray + ?Sized>(indices: &I) -> Result<RefreshRequest> {
    Ok(RefreshRequest::new(indices.to_string_array()?))
}

pub fn gateway_snapshot_request<I: ToStringArray + ?Sized>(
    indices: &I,
) -> Result<GatewaySnapshotRequest> {
    Ok(GatewaySnapshotRequest::new(indices.to_string_array()?))
}

/// Options: `filter-cache`, `field-data-cache`, `id-cache`, `fields`.
pub fn clear_cache_request<I: ToStringArray + ?Sized>(
    indices: &I,
    opts: Option<&Map<String, Value>>,
) -> Result<ClearIndicesCacheRequest> {
    let opts = Options::new(opts);
    let mut req = ClearIndicesCacheRequest::new(indices.to_string_array()?);

    if opts.flag("filter-cache") {
        req.filter_cache = true;
    }
    if opts.flag("field-data-cache") {
        req.field_data_cache = true;
    }
    if opts.flag("id-cache") {
        req.id_cache = true;
    }
    if let Some(fields) = opts.strings("fields")? {
        req.fields = Some(fields);
    }

    Ok(req)
}

/// Statistics across all indices.
///
/// Without an options map every statistics group is requested. With one,
/// `docs`, `store`, `indexing`, `get`, `search`, `merge`, `flush` and
/// `refresh` switch groups on and `types`/`groups` narrow them.
pub fn stats_request(opts: Option<&Map<String, Value>>) -> Result<IndicesStatsRequest> {
    let opts = Options::new(opts);
    let mut req = IndicesStatsRequest::new();

    if !opts.is_supplied() {
        req.all();
        return Ok(req);
    }

    if opts.flag("docs") {
        req.docs = true;
    }
    if opts.flag("store") {
        req.store = true;
    }
    if opts.flag("indexing") {
        req.indexing = true;
    }
    if let Some(types) = opts.strings("types")? {
        req.types = Some(types);
    }
    if let Some(groups) = opts.strings("groups")? {
        req.groups = Some(groups);
    }
    if opts.flag("get") {
        req.get = true;
    }
    if opts.flag("search") {
        req.search = true;
    }
    if opts.flag("merge") {
        req.merge = true;
    }
    if opts.flag("flush") {
        req.flush = true;
    }
    if opts.flag("refresh") {
        req.refresh = true;
    }

    Ok(req)
}

/// Options: `recovery`, `snapshot`.
pub fn status_request<I: ToStringArray + ?Sized>(
    indices: &I,
    opts: Option<&Map<String, Value>>,
) -> Result<IndicesStatusRequest> {
    let opts = Options::new(opts);
    let mut req = IndicesStatusRequest::new(indices.to_string_array()?);

    if opts.flag("recovery") {
        req.recovery = true;
    }
    if opts.flag("snapshot") {
        req.snapshot = true;
    }

    Ok(req)
}

pub fn segments_request<I: ToStringArray + ?Sized>(indices: &I) -> Result<IndicesSegmentsRequest> {
    Ok(IndicesSegmentsRequest::new(indices.to_string_array()?))
}

/// Apply alias operations atomically.
///
/// Each operation is `{"add": {"index", "alias", "filter"?}}` or
/// `{"remove": {"index", "alias"}}`. Options: `timeout`.
pub fn aliases_request(
    ops: &[Value],
    opts: Option<&Map<String, Value>>,
) -> Result<IndicesAliasesRequest> {
    let opts = Options::new(opts);
    let mut req = IndicesAliasesRequest::new();

    for op in ops {
        let op = op.as_object().ok_or_else(|| {
            Error::invalid("aliases", format!("expected a map, got {}", shape_name(op)))
        })?;
        for (action, params) in op {
            let params = params.as_object().ok_or_else(|| {
                Error::invalid(
                    action.as_str(),
                    format!("expected a map, got {}", shape_name(params)),
                )
            })?;
            match action.as_str() {
                "add" => {
                    let index = required_string(params, "index")?;
                    let alias = required_string(params, "alias")?;
                    let filter = Options::new(Some(params)).map("filter")?.cloned();
                    req.add_alias(index, alias, filter);
                }
                "remove" => {
                    let index = required_string(params, "index")?;
                    let alias = required_string(params, "alias")?;
                    req.remove_alias(index, alias);
                }
                other => {
                    return Err(Error::invalid(
                        "aliases",
                        format!("unknown alias action {:?}", other),
                    ))
                }
            }
        }
    }

    if let Some(timeout) = opts.time_value("timeout")? {
        req.timeout = timeout;
    }

    debug!(actions = req.actions.len(), "built aliases request");
    Ok(req)
}

fn required_string(params: &Map<String, Value>, key: &str) -> Result<String> {
    params
        .get(key)
        .filter(|v| !v.is_null())
        .map(value_to_string)
        .ok_or_else(|| Error::MissingArgument(key.to_string()))
}

/// Create or replace an index template.
///
/// Options: `template` (index pattern), `settings`, `mappings`, `order`.
pub fn put_template_request(
    name: &str,
    opts: Option<&Map<String, Value>>,
) -> Result<PutIndexTemplateRequest> {
    let opts = Options::new(opts);
    let mut req = PutIndexTemplateRequest::new(name);

    if let Some(template) = opts.string("template") {
        req.template = Some(template);
    }
    if let Some(settings) = opts.map("settings")? {
        req.settings = to_settings(Some(settings));
    }
    if let Some(mappings) = opts.map("mappings")? {
        req.mappings = mapping_bodies(mappings)?;
    }
    if let Some(order) = opts.int("order")? {
        req.order = order;
    }

    debug!(template = %req.name, pattern = ?req.template, "built template request");
    Ok(req)
}

/// Like [`put_template_request`], but fails on the server if the template exists
pub fn create_template_request(
    name: &str,
    opts: Option<&Map<String, Value>>,
) -> Result<PutIndexTemplateRequest> {
    let mut req = put_template_request(name, opts)?;
    req.create = true;
    Ok(req)
}

pub fn delete_template_request(name: &str) -> DeleteIndexTemplateRequest {
    DeleteIndexTemplateRequest::new(name)
}

/// Register a mapping for `mapping_type`. Options: `mapping`, `ignore-conflicts`.
pub fn put_mapping_request<I: ToStringArray + ?Sized>(
    indices: &I,
    mapping_type: &str,
    opts: Option<&Map<String, Value>>,
) -> Result<PutMappingRequest> {
    let opts = Options::new(opts);
    let mut req = PutMappingRequest::new(indices.to_string_array()?, mapping_type);

    if let Some(mapping) = opts.map("mapping")? {
        req.source = Some(mapping.clone());
    }
    if opts.flag("ignore-conflicts") {
        req.ignore_conflicts = true;
    }

    Ok(req)
}

pub fn delete_mapping_request<I: ToStringArray + ?Sized>(
    indices: &I,
    mapping_type: &str,
) -> Result<DeleteMappingRequest> {
    Ok(DeleteMappingRequest::new(indices.to_string_array()?, mapping_type))
}
