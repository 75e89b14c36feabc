//! Request builders
//!
//! One builder per operation. Required positional arguments are used as
//! given; each recognized key of the trailing options map is applied to the
//! typed request only when present and truthy, otherwise the native default
//! stands. Unrecognized keys are ignored.

mod document;
mod indices;
mod search;

pub use document::{
    count_request, delete_by_query_request, delete_request, get_request, index_request,
    multi_get_request,
};
pub use indices::{
    aliases_request, clear_cache_request, close_index_request, create_index_request,
    create_template_request, delete_index_request, delete_mapping_request,
    delete_template_request, flush_request, gateway_snapshot_request, indices_exists_request,
    open_index_request, optimize_request, put_mapping_request, put_template_request,
    refresh_request, segments_request, stats_request, status_request, update_settings_request,
};
pub use search::{scroll_request, search_request, SEARCH_CONTROL_KEYS};
