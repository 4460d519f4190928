//! Collection field analysis
//!
//! Samples a collection, records per-field presence counts and the distinct
//! types observed, then resolves each field to one type and a nullability.

use super::context::InferenceContext;
use super::types::{CollectionSchema, FieldMap, FieldSchema, Scalar, TypeRef};
use crate::error::Result;
use crate::naming::type_name_for_collection;
use crate::source::{Document, DocumentSource};
use crate::types::{OrderedMap, SCHEMA_ID_FIELD};
use indexmap::IndexSet;

/// What was seen for one field across the sample
#[derive(Debug, Clone, Default)]
struct FieldObservation {
    /// Documents the key occurred in (null values included)
    occurrences: usize,
    /// Distinct inferred types, in first-seen order
    types: IndexSet<TypeRef>,
}

impl FieldObservation {
    /// One type if all samples agree, `String` otherwise
    fn resolve_type(&self) -> TypeRef {
        match (self.types.len(), self.types.first()) {
            (1, Some(only)) => only.clone(),
            _ => TypeRef::scalar(Scalar::String),
        }
    }
}

/// Analyzes top-level collections of a document source
pub struct CollectionAnalyzer<'a> {
    source: &'a dyn DocumentSource,
}

impl<'a> CollectionAnalyzer<'a> {
    /// Create an analyzer over a source
    pub fn new(source: &'a dyn DocumentSource) -> Self {
        Self { source }
    }

    /// Sample and analyze one collection.
    ///
    /// Source errors propagate unchanged; there is no retry and no partial
    /// result. An empty sample yields an empty schema.
    pub async fn analyze(
        &self,
        collection: &str,
        ctx: &mut InferenceContext,
    ) -> Result<CollectionSchema> {
        let sample_size = ctx.config().sample_size;
        let documents = self.source.sample(collection, sample_size).await?;

        tracing::debug!(
            collection,
            requested = sample_size,
            sampled = documents.len(),
            "Sampled collection"
        );

        Ok(analyze_documents(collection, &documents, ctx))
    }
}

/// Resolve the field map of a collection from already sampled documents
pub fn analyze_documents(
    collection: &str,
    documents: &[Document],
    ctx: &mut InferenceContext,
) -> CollectionSchema {
    let type_name = type_name_for_collection(collection);
    if documents.is_empty() {
        return CollectionSchema::empty(collection, type_name);
    }

    let mut observations: OrderedMap<FieldObservation> = OrderedMap::new();
    for document in documents {
        for (key, value) in document {
            if ctx.config().is_version_field(key) {
                continue;
            }
            let observation = observations.entry(key.clone()).or_default();
            observation.occurrences += 1;

            // The identifier is always ID!, so its values are never inferred
            if ctx.config().is_id_field(key) {
                continue;
            }
            observation.types.insert(ctx.infer(value, key, &type_name));
        }
    }

    let total = documents.len();
    let has_identifier = observations.contains_key(&ctx.config().id_field);
    let mut fields = FieldMap::new();

    for (key, observation) in &observations {
        if ctx.config().is_id_field(key) {
            fields.insert(
                SCHEMA_ID_FIELD.to_string(),
                FieldSchema::required(TypeRef::scalar(Scalar::ID)),
            );
            continue;
        }
        if key == SCHEMA_ID_FIELD && has_identifier {
            tracing::warn!(
                collection,
                id_field = %ctx.config().id_field,
                "Documents carry both an identifier and an `id` field; keeping the identifier"
            );
            continue;
        }

        let ty = observation.resolve_type();
        if observation.types.len() > 1 {
            tracing::debug!(
                collection,
                field = %key,
                observed = observation.types.len(),
                "Conflicting types, falling back to String"
            );
        }

        let field = if observation.occurrences == total {
            FieldSchema::required(ty)
        } else {
            FieldSchema::optional(ty)
        };
        fields.insert(key.clone(), field);
    }

    CollectionSchema {
        collection: collection.to_string(),
        type_name,
        fields,
        sampled: total,
    }
}
