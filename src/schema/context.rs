//! Per-run inference configuration and state

use super::registry::NestedTypeRegistry;
use crate::types::{DEFAULT_ID_FIELD, DEFAULT_SAMPLE_SIZE, DEFAULT_VERSION_FIELD};

/// Inference settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    /// Documents sampled per collection
    pub sample_size: usize,
    /// Document identifier field, exposed as `id: ID!`
    pub id_field: String,
    /// Version bookkeeping field, never exposed
    pub version_field: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            id_field: DEFAULT_ID_FIELD.to_string(),
            version_field: DEFAULT_VERSION_FIELD.to_string(),
        }
    }
}

impl InferenceConfig {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-collection sample size
    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Set the identifier field name
    #[must_use]
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }

    /// Set the version bookkeeping field name
    #[must_use]
    pub fn with_version_field(mut self, field: impl Into<String>) -> Self {
        self.version_field = field.into();
        self
    }

    /// Check for the identifier field
    pub fn is_id_field(&self, key: &str) -> bool {
        key == self.id_field
    }

    /// Check for the version bookkeeping field
    pub fn is_version_field(&self, key: &str) -> bool {
        key == self.version_field
    }
}

/// State owned by a single conversion run.
///
/// Holds the nested type registry, which grows monotonically while
/// collections are analyzed and is read once when the document is assembled.
/// Nothing here outlives the run.
#[derive(Debug, Clone, Default)]
pub struct InferenceContext {
    config: InferenceConfig,
    pub(super) registry: NestedTypeRegistry,
}

impl InferenceContext {
    /// Start a run with the given settings
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            config,
            registry: NestedTypeRegistry::new(),
        }
    }

    /// Settings for this run
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Nested types discovered so far
    pub fn registry(&self) -> &NestedTypeRegistry {
        &self.registry
    }

    /// Finish the run, handing back the discovered nested types
    pub fn into_registry(self) -> NestedTypeRegistry {
        self.registry
    }
}
