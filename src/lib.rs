// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # doc2sdl
//!
//! Infers a GraphQL schema (SDL text) from a schemaless document store by
//! sampling documents from each collection.
//!
//! ## Features
//!
//! - **Sampling**: Random sample of up to N documents per collection
//! - **Type inference**: Scalars, object ids, dates, lists and nested objects
//! - **Nested types**: Embedded objects become named types, deduplicated per run
//! - **Root query**: A list accessor and a by-id accessor per collection
//! - **Sources**: In-memory collections or a directory of JSON / JSON Lines exports
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use doc2sdl::{MemorySource, Result, SchemaConverter};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = MemorySource::from_json(json!({
//!         "posts": [{"_id": {"$oid": "507f191e810c19729de860ea"}, "title": "Hi"}]
//!     }))?;
//!
//!     let schema = SchemaConverter::from_source(source).convert(&["posts"]).await?;
//!     println!("{}", schema.to_sdl());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │              SchemaConverter::convert(collections)           │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────┬────────────────┴───────┬───────────┬──────────┐
//! │   Source    │       Schema           │  Naming   │  Render  │
//! ├─────────────┼────────────────────────┼───────────┼──────────┤
//! │ Memory      │ CollectionAnalyzer     │ Type name │ type {}  │
//! │ JSON dir    │ Type inference         │ Singular  │ Query    │
//! │ Sampling    │ Nested type registry   │ Plural    │ Document │
//! └─────────────┴────────────────────────┴───────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common constants and type aliases
pub mod types;

/// Document model and document sources
pub mod source;

/// Collection and type naming rules
pub mod naming;

/// Field analysis and type inference
pub mod schema;

/// SDL text rendering
pub mod render;

/// Conversion engine
pub mod engine;

/// Converter configuration
pub mod config;

/// Schema output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ConverterConfig;
pub use engine::{GeneratedSchema, SchemaConverter};
pub use schema::{InferenceConfig, TypeRef};
pub use source::{DocumentSource, JsonDirSource, MemorySource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
