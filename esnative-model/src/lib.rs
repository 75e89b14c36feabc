//! Native Elasticsearch client object model
//!
//! Typed requests, typed responses and the supporting value types that the
//! native transport understands. Requests are plain mutable structs whose
//! constructors carry the native defaults; responses are read-only data
//! handed back by the transport after a call completes.
//!
//! Nothing in this crate performs I/O. Converting loosely-typed maps into
//! these types (and back) lives in the `esnative` crate.

pub mod address;
pub mod error;
pub mod request;
pub mod response;
pub mod settings;
pub mod types;
pub mod value;

pub use address::TransportAddress;
pub use error::Error;
pub use settings::{Settings, SettingsBuilder};
pub use types::{ContentType, OpType, SearchType, TimeValue, VersionType};
pub use value::NativeValue;

/// Result type for native model operations
pub type Result<T> = std::result::Result<T, Error>;
