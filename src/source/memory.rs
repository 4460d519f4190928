//! In-memory document source

use super::{into_document, sample_documents, Document, DocumentSource};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Document source backed by in-memory collections
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// Collection name to stored documents
    collections: BTreeMap<String, Vec<Document>>,
    /// Fixed RNG seed for reproducible sampling
    seed: Option<u64>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from `{"collection": [ {..}, {..} ], ...}`
    pub fn from_json(collections: JsonValue) -> Result<Self> {
        let JsonValue::Object(map) = collections else {
            return Err(Error::decode(
                "<memory>",
                "expected an object of collection name to document array",
            ));
        };

        let mut source = Self::new();
        for (name, documents) in map {
            let JsonValue::Array(items) = documents else {
                return Err(Error::decode(
                    "<memory>",
                    format!("collection '{name}': expected an array of documents"),
                ));
            };
            let documents = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    into_document(item).ok_or_else(|| {
                        Error::decode(
                            "<memory>",
                            format!("collection '{name}', record {index}: expected an object"),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            source.insert(name, documents);
        }

        Ok(source)
    }

    /// Set a fixed sampling seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a collection
    #[must_use]
    pub fn with_collection(mut self, name: impl Into<String>, documents: Vec<Document>) -> Self {
        self.insert(name, documents);
        self
    }

    /// Insert or replace a collection
    pub fn insert(&mut self, name: impl Into<String>, documents: Vec<Document>) {
        self.collections.insert(name.into(), documents);
    }

    /// Number of documents stored for a collection
    pub fn len_of(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn sample(&self, collection: &str, size: usize) -> Result<Vec<Document>> {
        // Unknown collections sample as empty, like a document store would
        let documents = self
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default();
        Ok(sample_documents(documents, size, self.seed))
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        Ok(self.collections.keys().cloned().collect())
    }
}
