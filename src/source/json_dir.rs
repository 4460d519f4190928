//! Directory-of-exports document source
//!
//! Each collection is one file under the root directory:
//!
//! ```text
//! export/
//! ├── users.json      # JSON array of documents
//! ├── posts.jsonl     # one document per line
//! └── events.ndjson   # same as .jsonl
//! ```
//!
//! Files produced by `mongoexport` (Extended JSON) are understood.

use super::{into_document, sample_documents, Document, DocumentSource};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Recognized collection file extensions, in lookup order
const EXTENSIONS: [&str; 3] = ["json", "jsonl", "ndjson"];

/// Document source reading collection exports from a directory
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    /// Directory holding the collection files
    root: PathBuf,
    /// Fixed RNG seed for reproducible sampling
    seed: Option<u64>,
}

impl JsonDirSource {
    /// Create a source over the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            seed: None,
        }
    }

    /// Set a fixed sampling seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set an optional sampling seed
    #[must_use]
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locate the file backing a collection
    async fn collection_path(&self, collection: &str) -> Result<PathBuf> {
        for ext in EXTENSIONS {
            let path = self.root.join(format!("{collection}.{ext}"));
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                return Ok(path);
            }
        }
        Err(Error::collection_not_found(collection))
    }

    /// Read every document of a collection
    async fn load(&self, collection: &str) -> Result<Vec<Document>> {
        let path = self.collection_path(collection).await?;
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::source(format!("Failed to read {}: {e}", path.display())))?;

        let documents = if is_line_delimited(&path) {
            parse_json_lines(&content, &path)?
        } else {
            parse_json_array(&content, &path)?
        };

        tracing::debug!(
            collection,
            path = %path.display(),
            documents = documents.len(),
            "Loaded collection export"
        );

        Ok(documents)
    }
}

#[async_trait]
impl DocumentSource for JsonDirSource {
    async fn sample(&self, collection: &str, size: usize) -> Result<Vec<Document>> {
        let documents = self.load(collection).await?;
        Ok(sample_documents(documents, size, self.seed))
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            Error::source(format!(
                "Failed to open source directory {}: {e}",
                self.root.display()
            ))
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let known_ext = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| EXTENSIONS.contains(&ext));
            if !known_ext || !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }
}

fn is_line_delimited(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext != "json")
}

/// Parse a `.json` export: a single array of objects
fn parse_json_array(content: &str, path: &Path) -> Result<Vec<Document>> {
    let display = path.display().to_string();
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| Error::decode(&display, e.to_string()))?;
    let serde_json::Value::Array(items) = value else {
        return Err(Error::decode(display, "expected a JSON array of documents"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            into_document(item).ok_or_else(|| {
                Error::decode(&display, format!("record {index}: expected an object"))
            })
        })
        .collect()
}

/// Parse a `.jsonl` / `.ndjson` export: one object per non-blank line
fn parse_json_lines(content: &str, path: &Path) -> Result<Vec<Document>> {
    let display = path.display().to_string();
    let mut documents = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;
        let value: serde_json::Value = serde_json::from_str(line)
            .map_err(|e| Error::decode(&display, format!("line {line_no}: {e}")))?;
        let document = into_document(value).ok_or_else(|| {
            Error::decode(&display, format!("line {line_no}: expected an object"))
        })?;
        documents.push(document);
    }

    Ok(documents)
}
