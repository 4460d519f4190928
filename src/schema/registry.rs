//! Nested type registry
//!
//! Object shapes found inside field values are registered under a derived
//! name exactly once. The first sample seen for a name defines the shape;
//! later encounters under the same name are ignored, even if their members
//! differ.

use super::context::InferenceContext;
use super::types::{FieldMap, FieldSchema};
use crate::source::Document;
use crate::types::OrderedMap;
use serde::Serialize;

/// Discovered nested object types, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NestedTypeRegistry {
    types: OrderedMap<FieldMap>,
}

impl NestedTypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a type name is taken
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Fields of a registered type
    pub fn get(&self, type_name: &str) -> Option<&FieldMap> {
        self.types.get(type_name)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if nothing was registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMap)> {
        self.types.iter().map(|(name, fields)| (name.as_str(), fields))
    }

    /// Registered type names in discovery order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Take the registered types
    pub fn into_inner(self) -> OrderedMap<FieldMap> {
        self.types
    }

    /// Claim a name. Returns false if it was already taken.
    ///
    /// The slot is claimed before the shape is analyzed so a parent type is
    /// ordered ahead of the types nested inside it.
    fn reserve(&mut self, type_name: &str) -> bool {
        if self.types.contains_key(type_name) {
            return false;
        }
        self.types.insert(type_name.to_string(), FieldMap::new());
        true
    }

    fn fill(&mut self, type_name: &str, fields: FieldMap) {
        if let Some(slot) = self.types.get_mut(type_name) {
            *slot = fields;
        }
    }
}

impl InferenceContext {
    /// Register `type_name` from one object sample, unless already known.
    ///
    /// Every member except the identifier and version fields is inferred with
    /// `type_name` as owner and stored as required: presence statistics do
    /// not exist for a single sample. Only the outer type is made non-null,
    /// list elements keep their inferred nullability.
    pub fn register_if_absent(&mut self, type_name: &str, sample: &Document) {
        if !self.registry.reserve(type_name) {
            return;
        }

        let mut fields = FieldMap::new();
        for (key, value) in sample {
            if self.config().is_id_field(key) || self.config().is_version_field(key) {
                continue;
            }
            let ty = self.infer(value, key, type_name);
            fields.insert(key.clone(), FieldSchema::nested_member(ty));
        }

        tracing::debug!(type_name, fields = fields.len(), "Registered nested type");
        self.registry.fill(type_name, fields);
    }
}
