//! Schema inference module
//!
//! Infers typed object shapes from sampled documents.
//!
//! # Features
//!
//! - **Type Inference**: Maps values to `String`/`Int`/`Float`/`Boolean`/`ID`, lists and objects
//! - **Nested Types**: Registers each nested object shape once, under a derived name
//! - **Nullability**: A field is required only if present in every sampled document
//! - **Conflict Resolution**: Fields observed with more than one type fall back to `String`

mod analyzer;
mod context;
mod inference;
mod registry;
mod types;

pub use analyzer::{analyze_documents, CollectionAnalyzer};
pub use context::{InferenceConfig, InferenceContext};
pub use inference::is_object_id;
pub use registry::NestedTypeRegistry;
pub use types::{
    Argument, CollectionSchema, FieldMap, FieldSchema, QueryField, Scalar, TypeRef,
};
