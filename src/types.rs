//! Common types used throughout doc2sdl
//!
//! Shared constants and type aliases used across multiple modules.

use indexmap::IndexMap;

// ============================================================================
// Document Conventions
// ============================================================================

/// Identifier field every stored document carries
pub const DEFAULT_ID_FIELD: &str = "_id";

/// Version-control bookkeeping field written by the ODM layer
pub const DEFAULT_VERSION_FIELD: &str = "__v";

/// Name the identifier field is exposed under in the generated schema
pub const SCHEMA_ID_FIELD: &str = "id";

/// Number of documents sampled per collection unless configured otherwise
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Name of the generated root query type
pub const QUERY_TYPE_NAME: &str = "Query";

// ============================================================================
// Type Aliases
// ============================================================================

/// Insertion-ordered map keyed by field or type name
pub type OrderedMap<V> = IndexMap<String, V>;
