//! Settings construction from generic maps

use crate::coerce::value_to_string;
use esnative_model::Settings;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Builds immutable settings from a flat map, stringifying every value.
///
/// `None` yields the shared empty settings instance.
pub fn to_settings(map: Option<&Map<String, Value>>) -> Arc<Settings> {
    match map {
        None => Settings::empty(),
        Some(map) => Arc::new(
            map.iter()
                .fold(Settings::builder(), |builder, (key, value)| {
                    builder.put(key.as_str(), value_to_string(value))
                })
                .build(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_none_returns_shared_empty() {
        let a = to_settings(None);
        let b = to_settings(None);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &Settings::empty()));
        assert!(a.is_empty());
    }

    #[test]
    fn test_values_are_stringified() {
        let input = json!({
            "number-of-shards": 5,
            "index.refresh_interval": "1s",
            "index.compound": true
        });
        let settings = to_settings(input.as_object());
        assert_eq!(settings.get("number-of-shards"), Some("5"));
        assert_eq!(settings.get("index.refresh_interval"), Some("1s"));
        assert_eq!(settings.get("index.compound"), Some("true"));
        assert_eq!(settings.len(), 3);
    }

    #[test]
    fn test_empty_map_is_not_the_shared_instance() {
        let input = json!({});
        let settings = to_settings(input.as_object());
        assert!(settings.is_empty());
        assert!(!Arc::ptr_eq(&settings, &Settings::empty()));
    }
}
