//! Schema assembly engine
//!
//! Orchestrates a conversion run.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SchemaConverter` - Analyzes collections and assembles the SDL document
//! - `GeneratedSchema` - The assembled types and root query
//! - `ConversionStats` - Counters for one run
//!
//! Collections are analyzed one at a time, in request order. Nested types are
//! read only after every collection is done, so the registry is complete.
//! Any source error aborts the run; no partial schema is returned.

mod types;

pub use types::{ConversionStats, GeneratedSchema, TypeDefinition};

use crate::error::Result;
use crate::naming::{self, QueryNames};
use crate::schema::{CollectionAnalyzer, InferenceConfig, InferenceContext, QueryField};
use crate::source::DocumentSource;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Converts sampled collections into a schema document
pub struct SchemaConverter {
    /// Where documents come from
    source: Arc<dyn DocumentSource>,
    /// Inference settings
    config: InferenceConfig,
}

impl SchemaConverter {
    /// Create a converter over a shared source
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self {
            source,
            config: InferenceConfig::default(),
        }
    }

    /// Create a converter owning its source
    pub fn from_source<S: DocumentSource + 'static>(source: S) -> Self {
        Self::new(Arc::new(source))
    }

    /// Set inference configuration
    #[must_use]
    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Get inference configuration
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Convert the named collections.
    ///
    /// Each call is an independent run with its own nested type registry.
    pub async fn convert<S: AsRef<str> + Sync>(&self, collections: &[S]) -> Result<GeneratedSchema> {
        let start = Instant::now();
        let mut ctx = InferenceContext::new(self.config.clone());
        let analyzer = CollectionAnalyzer::new(self.source.as_ref());
        let mut stats = ConversionStats::default();
        let mut types = Vec::with_capacity(collections.len());
        let mut seen_names = HashSet::new();

        for collection in collections {
            let collection = collection.as_ref();
            let schema = analyzer.analyze(collection, &mut ctx).await?;

            if !seen_names.insert(schema.type_name.clone()) {
                tracing::warn!(
                    collection,
                    type_name = %schema.type_name,
                    "Type name already produced by another collection"
                );
            }
            if !naming::is_valid_graphql_name(&schema.type_name) {
                tracing::warn!(
                    collection,
                    type_name = %schema.type_name,
                    "Derived type name is not a valid GraphQL name"
                );
            }

            stats.add_collection(schema.sampled);
            types.push(TypeDefinition::new(schema.type_name, schema.fields));
        }

        let nested_types: Vec<TypeDefinition> = ctx
            .into_registry()
            .into_inner()
            .into_iter()
            .map(|(name, fields)| TypeDefinition::new(name, fields))
            .collect();
        for nested in &nested_types {
            if seen_names.contains(&nested.name) {
                tracing::warn!(
                    type_name = %nested.name,
                    "Nested type name collides with a collection type"
                );
            }
            if !naming::is_valid_graphql_name(&nested.name) {
                tracing::warn!(
                    type_name = %nested.name,
                    "Nested type name is not a valid GraphQL name"
                );
            }
        }
        stats.nested_types = nested_types.len();
        stats.elapsed_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            collections = stats.collections,
            documents = stats.documents_sampled,
            nested_types = stats.nested_types,
            elapsed_ms = stats.elapsed_ms,
            "Schema conversion complete"
        );

        Ok(GeneratedSchema {
            types,
            nested_types,
            query: root_query_fields(collections),
            stats,
        })
    }

    /// Convert every collection the source lists
    pub async fn convert_all(&self) -> Result<GeneratedSchema> {
        let collections = self.source.list_collections().await?;
        tracing::debug!(count = collections.len(), "Listed collections");
        self.convert(&collections).await
    }

    /// Convert the named collections and return the SDL text
    pub async fn assemble<S: AsRef<str> + Sync>(&self, collections: &[S]) -> Result<String> {
        Ok(self.convert(collections).await?.to_sdl())
    }
}

/// Root query surface: a list accessor and a by-id accessor per collection
pub fn root_query_fields<S: AsRef<str>>(collections: &[S]) -> Vec<QueryField> {
    collections
        .iter()
        .flat_map(|collection| {
            let names = QueryNames::for_collection(collection.as_ref());
            [
                QueryField::list_accessor(names.plural, &names.type_name),
                QueryField::by_id_accessor(names.singular, &names.type_name),
            ]
        })
        .collect()
}
