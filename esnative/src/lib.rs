//! Marshalling between generic maps and the native Elasticsearch client
//!
//! Outbound, loosely-typed option maps and positional arguments become typed
//! requests from [`esnative_model::request`]. Inbound, typed responses become
//! `serde_json` maps shaped like the REST API's JSON, so callers see the same
//! data whether they went through the native client or over HTTP.
//!
//! # Options
//!
//! Every request builder takes an optional options map. An option is applied
//! only when its value is present and truthy; `null` and `false` leave the
//! native default in place:
//!
//! ```
//! use serde_json::json;
//!
//! let opts = json!({"id": "1", "refresh": true, "routing": null});
//! let req = esnative::request::index_request(
//!     "articles",
//!     "article",
//!     &json!({"title": "ElasticSearch"}),
//!     opts.as_object(),
//! )
//! .unwrap();
//!
//! assert_eq!(req.id.as_deref(), Some("1"));
//! assert!(req.refresh);
//! assert!(req.routing.is_none());
//! ```
//!
//! # Responses
//!
//! Normalized responses carry most fields twice, under a plain key (`id`)
//! and an underscore-prefixed key (`_id`), matching both historical shapes.

pub mod address;
pub mod coerce;
pub mod config;
pub mod convert;
pub mod error;
pub mod options;
pub mod request;
pub mod resolve;
pub mod response;
pub mod settings;
pub mod telemetry;

pub use coerce::ToStringArray;
pub use config::Config;
pub use error::{Error, Result};
pub use options::Options;
pub use resolve::{content_type, version_type, Resolve};
pub use settings::to_settings;
