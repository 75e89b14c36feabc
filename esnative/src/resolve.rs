//! Enum resolution for content types and version types
//!
//! Callers may pass a resolved constant, a name, or a JSON value. Names are
//! matched case-insensitively against a fixed table; anything unrecognized
//! resolves to the default constant instead of failing.

use esnative_model::{ContentType, VersionType};
use serde_json::Value;
use tracing::debug;

/// Resolution of a loosely-typed input to a native constant
pub trait Resolve<T> {
    fn resolve(&self) -> T;
}

/// Resolves anything naming a content type. Unknown names yield JSON.
pub fn content_type<R: Resolve<ContentType> + ?Sized>(input: &R) -> ContentType {
    input.resolve()
}

/// Resolves anything naming a version type. Unknown names yield internal.
pub fn version_type<R: Resolve<VersionType> + ?Sized>(input: &R) -> VersionType {
    input.resolve()
}

fn content_type_from_name(name: &str) -> ContentType {
    match name.to_lowercase().as_str() {
        "application/json" | "text/json" | "json" => ContentType::Json,
        "application/smile" | "smile" => ContentType::Smile,
        other => {
            debug!(content_type = other, "unrecognized content type, using json");
            ContentType::Json
        }
    }
}

fn version_type_from_name(name: &str) -> VersionType {
    match name.to_lowercase().as_str() {
        "internal" => VersionType::Internal,
        "external" => VersionType::External,
        other => {
            debug!(version_type = other, "unrecognized version type, using internal");
            VersionType::Internal
        }
    }
}

impl Resolve<ContentType> for ContentType {
    fn resolve(&self) -> ContentType {
        *self
    }
}

impl Resolve<ContentType> for str {
    fn resolve(&self) -> ContentType {
        content_type_from_name(self)
    }
}

impl Resolve<ContentType> for String {
    fn resolve(&self) -> ContentType {
        content_type_from_name(self)
    }
}

impl Resolve<ContentType> for Value {
    fn resolve(&self) -> ContentType {
        match self {
            Value::String(s) => content_type_from_name(s),
            _ => ContentType::Json,
        }
    }
}

impl Resolve<VersionType> for VersionType {
    fn resolve(&self) -> VersionType {
        *self
    }
}

impl Resolve<VersionType> for str {
    fn resolve(&self) -> VersionType {
        version_type_from_name(self)
    }
}

impl Resolve<VersionType> for String {
    fn resolve(&self) -> VersionType {
        version_type_from_name(self)
    }
}

impl Resolve<VersionType> for Value {
    fn resolve(&self) -> VersionType {
        match self {
            Value::String(s) => version_type_from_name(s),
            _ => VersionType::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ===================================================================
    // Content type
    // ===================================================================

    #[test]
    fn test_content_type_names() {
        assert_eq!(content_type("application/json"), ContentType::Json);
        assert_eq!(content_type("text/json"), ContentType::Json);
        assert_eq!(content_type("JSON"), ContentType::Json);
        assert_eq!(content_type("application/smile"), ContentType::Smile);
        assert_eq!(content_type("Smile"), ContentType::Smile);
    }

    #[test]
    fn test_content_type_unknown_defaults_to_json() {
        assert_eq!(content_type("application/xml"), ContentType::Json);
        assert_eq!(content_type(""), ContentType::Json);
        assert_eq!(content_type(&json!(42)), ContentType::Json);
    }

    #[test]
    fn test_content_type_resolved_passes_through() {
        assert_eq!(content_type(&ContentType::Smile), ContentType::Smile);
        assert_eq!(content_type(&json!("smile")), ContentType::Smile);
        assert_eq!(content_type(&"smile".to_string()), ContentType::Smile);
    }

    // ===================================================================
    // Version type
    // ===================================================================

    #[test]
    fn test_version_type_names() {
        assert_eq!(version_type("external"), VersionType::External);
        assert_eq!(version_type("EXTERNAL"), VersionType::External);
        assert_eq!(version_type("internal"), VersionType::Internal);
        assert_eq!(version_type(&VersionType::External), VersionType::External);
    }

    #[test]
    fn test_version_type_unknown_defaults_to_internal() {
        assert_eq!(version_type("external_gte"), VersionType::Internal);
        assert_eq!(version_type(&json!(null)), VersionType::Internal);
    }
}
