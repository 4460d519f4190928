//! Engine types
//!
//! The assembled schema and run statistics.

use crate::render::{render_document, render_query, render_type};
use crate::schema::{FieldMap, QueryField};
use serde::Serialize;
use std::fmt;

/// One rendered object type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDefinition {
    /// Type name
    pub name: String,
    /// Resolved fields
    pub fields: FieldMap,
}

impl TypeDefinition {
    /// Create a type definition
    pub fn new(name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Render as an SDL block
    pub fn render(&self) -> String {
        render_type(&self.name, &self.fields)
    }
}

/// Statistics for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Collections analyzed
    pub collections: usize,
    /// Collections that sampled no documents
    pub empty_collections: usize,
    /// Documents sampled across all collections
    pub documents_sampled: usize,
    /// Nested types discovered
    pub nested_types: usize,
    /// Wall time in milliseconds
    pub elapsed_ms: u64,
}

impl ConversionStats {
    /// Record one analyzed collection
    pub fn add_collection(&mut self, sampled: usize) {
        self.collections += 1;
        self.documents_sampled += sampled;
        if sampled == 0 {
            self.empty_collections += 1;
        }
    }
}

/// Result of a conversion run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedSchema {
    /// Top-level types, in request order
    pub types: Vec<TypeDefinition>,
    /// Nested types, in discovery order
    pub nested_types: Vec<TypeDefinition>,
    /// Root query fields
    pub query: Vec<QueryField>,
    /// Run statistics
    pub stats: ConversionStats,
}

impl GeneratedSchema {
    /// Render the whole document: top-level types, nested types, then `Query`
    pub fn to_sdl(&self) -> String {
        let blocks = self
            .types
            .iter()
            .chain(&self.nested_types)
            .map(TypeDefinition::render)
            .chain(std::iter::once(render_query(&self.query)));
        render_document(blocks)
    }

    /// Find a type (top-level or nested) by name
    pub fn find_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types
            .iter()
            .chain(&self.nested_types)
            .find(|t| t.name == name)
    }

    /// All type names in output order, excluding `Query`
    pub fn type_names(&self) -> Vec<&str> {
        self.types
            .iter()
            .chain(&self.nested_types)
            .map(|t| t.name.as_str())
            .collect()
    }
}

impl fmt::Display for GeneratedSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sdl())
    }
}
