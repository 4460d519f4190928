//! Document sources
//!
//! A document source is anything that can list its collections and hand back
//! a bounded random sample of documents for one of them. The inference core
//! only ever talks to the [`DocumentSource`] trait.
//!
//! # Sources
//!
//! - [`MemorySource`] - Collections held in memory (tests, embedding)
//! - [`JsonDirSource`] - A directory of exported `<collection>.json` / `.jsonl` files

mod json_dir;
mod memory;
mod value;

pub use json_dir::JsonDirSource;
pub use memory::MemorySource;
pub use value::{into_document, Document, Value};

use crate::error::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of sampled documents
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Return up to `size` randomly chosen documents from `collection`
    async fn sample(&self, collection: &str, size: usize) -> Result<Vec<Document>>;

    /// List the collection names this source knows about
    async fn list_collections(&self) -> Result<Vec<String>>;
}

/// Pick up to `size` distinct documents at random.
///
/// When the whole collection fits in the sample it is returned untouched, in
/// stored order.
pub fn sample_documents(documents: Vec<Document>, size: usize, seed: Option<u64>) -> Vec<Document> {
    if size >= documents.len() {
        return documents;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let picked = rand::seq::index::sample(&mut rng, documents.len(), size);

    let mut slots: Vec<Option<Document>> = documents.into_iter().map(Some).collect();
    picked
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}
