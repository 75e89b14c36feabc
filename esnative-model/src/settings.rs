//! Immutable index/cluster settings

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

/// Process-wide empty settings. Never mutated after construction.
static EMPTY_SETTINGS: LazyLock<Arc<Settings>> = LazyLock::new(|| Arc::new(Settings::default()));

/// Flat key-to-string settings, frozen once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    entries: BTreeMap<String, String>,
}

impl Settings {
    /// The shared empty settings instance
    pub fn empty() -> Arc<Settings> {
        Arc::clone(&EMPTY_SETTINGS)
    }

    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates settings entries before freezing them
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    entries: BTreeMap<String, String>,
}

impl SettingsBuilder {
    pub fn put(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Settings {
        Settings {
            entries: self.entries,
        }
    }
}
