//! Index administration requests

use crate::settings::Settings;
use crate::types::TimeValue;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Default timeout of acknowledged operations
const DEFAULT_ACK_TIMEOUT: TimeValue = TimeValue::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexRequest {
    pub index: String,
    pub settings: Arc<Settings>,
    /// Mapping type name to mapping body
    pub mappings: BTreeMap<String, Map<String, Value>>,
}

impl CreateIndexRequest {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            settings: Settings::empty(),
            mappings: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIndexRequest {
    pub indices: Vec<String>,
}

impl DeleteIndexRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self { indices }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenIndexRequest {
    pub index: String,
}

impl OpenIndexRequest {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseIndexRequest {
    pub index: String,
}

impl CloseIndexRequest {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSettingsRequest {
    pub indices: Vec<String>,
    pub settings: Arc<Settings>,
}

impl UpdateSettingsRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            settings: Settings::empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeRequest {
    pub indices: Vec<String>,
    pub wait_for_merge: bool,
    /// `-1` lets the merge policy decide
    pub max_num_segments: i32,
    pub only_expunge_deletes: bool,
    pub flush: bool,
    pub refresh: bool,
}

impl OptimizeRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            wait_for_merge: true,
            max_num_segments: -1,
            only_expunge_deletes: false,
            flush: true,
            refresh: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushRequest {
    pub indices: Vec<String>,
    pub refresh: bool,
    pub force: bool,
    pub full: bool,
}

impl FlushRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            refresh: false,
            force: false,
            full: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    pub indices: Vec<String>,
}

impl RefreshRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self { indices }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySnapshotRequest {
    pub indices: Vec<String>,
}

impl GatewaySnapshotRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self { indices }
    }
}

/// Clears caches. With no cache selected the server clears all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearIndicesCacheRequest {
    pub indices: Vec<String>,
    pub filter_cache: bool,
    pub field_data_cache: bool,
    pub id_cache: bool,
    pub fields: Option<Vec<String>>,
}

impl ClearIndicesCacheRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            filter_cache: false,
            field_data_cache: false,
            id_cache: false,
            fields: None,
        }
    }
}

/// Index statistics. An empty index list targets every index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicesStatsRequest {
    pub indices: Vec<String>,
    pub docs: bool,
    pub store: bool,
    pub indexing: bool,
    pub types: Option<Vec<String>>,
    pub groups: Option<Vec<String>>,
    pub get: bool,
    pub search: bool,
    pub merge: bool,
    pub flush: bool,
    pub refresh: bool,
}

impl IndicesStatsRequest {
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
            docs: true,
            store: true,
            indexing: true,
            types: None,
            groups: None,
            get: true,
            search: true,
            merge: false,
            flush: false,
            refresh: false,
        }
    }

    /// Select every statistics group
    pub fn all(&mut self) -> &mut Self {
        self.docs = true;
        self.store = true;
        self.indexing = true;
        self.get = true;
        self.search = true;
        self.merge = true;
        self.flush = true;
        self.refresh = true;
        self
    }
}

impl Default for IndicesStatsRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicesStatusRequest {
    pub indices: Vec<String>,
    pub recovery: bool,
    pub snapshot: bool,
}

impl IndicesStatusRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            recovery: false,
            snapshot: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicesSegmentsRequest {
    pub indices: Vec<String>,
}

impl IndicesSegmentsRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self { indices }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AliasAction {
    Add {
        index: String,
        alias: String,
        filter: Option<Map<String, Value>>,
    },
    Remove {
        index: String,
        alias: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicesAliasesRequest {
    pub actions: Vec<AliasAction>,
    pub timeout: TimeValue,
}

impl IndicesAliasesRequest {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            timeout: DEFAULT_ACK_TIMEOUT,
        }
    }

    pub fn add_alias(
        &mut self,
        index: impl Into<String>,
        alias: impl Into<String>,
        filter: Option<Map<String, Value>>,
    ) -> &mut Self {
        self.actions.push(AliasAction::Add {
            index: index.into(),
            alias: alias.into(),
            filter,
        });
        self
    }

    pub fn remove_alias(&mut self, index: impl Into<String>, alias: impl Into<String>) -> &mut Self {
        self.actions.push(AliasAction::Remove {
            index: index.into(),
            alias: alias.into(),
        });
        self
    }
}

impl Default for IndicesAliasesRequest {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PutIndexTemplateRequest {
    pub name: String,
    /// Index name pattern the template applies to
    pub template: Option<String>,
    pub settings: Arc<Settings>,
    pub mappings: BTreeMap<String, Map<String, Value>>,
    pub order: i32,
    /// Fail instead of replacing an existing template
    pub create: bool,
}

impl PutIndexTemplateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: None,
            settings: Settings::empty(),
            mappings: BTreeMap::new(),
            order: 0,
            create: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIndexTemplateRequest {
    pub name: String,
}

impl DeleteIndexTemplateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PutMappingRequest {
    pub indices: Vec<String>,
    pub doc_type: String,
    pub source: Option<Map<String, Value>>,
    pub ignore_conflicts: bool,
}

impl PutMappingRequest {
    pub fn new(indices: Vec<String>, doc_type: impl Into<String>) -> Self {
        Self {
            indices,
            doc_type: doc_type.into(),
            source: None,
            ignore_conflicts: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMappingRequest {
    pub indices: Vec<String>,
    pub doc_type: String,
}

impl DeleteMappingRequest {
    pub fn new(indices: Vec<String>, doc_type: impl Into<String>) -> Self {
        Self {
            indices,
            doc_type: doc_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicesExistsRequest {
    pub indices: Vec<String>,
}

impl IndicesExistsRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self { indices }
    }
}
