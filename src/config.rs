//! Converter configuration
//!
//! Settings for a conversion run, loadable from a YAML or JSON file:
//!
//! ```yaml
//! source: ./export
//! collections: [users, posts]
//! sample_size: 200
//! id_field: _id
//! version_field: __v
//! seed: 42
//! output: schema.graphql
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use crate::error::{Error, Result};
use crate::schema::InferenceConfig;
use crate::types::{DEFAULT_ID_FIELD, DEFAULT_SAMPLE_SIZE, DEFAULT_VERSION_FIELD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete converter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Directory holding `<collection>.json` / `.jsonl` exports
    pub source: Option<PathBuf>,

    /// Collections to convert (empty = every collection in the source)
    pub collections: Vec<String>,

    /// Documents sampled per collection
    pub sample_size: usize,

    /// Document identifier field
    pub id_field: String,

    /// Version bookkeeping field to hide
    pub version_field: String,

    /// Fixed sampling seed for reproducible output
    pub seed: Option<u64>,

    /// Output file (stdout when unset)
    pub output: Option<PathBuf>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source: None,
            collections: Vec::new(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            id_field: DEFAULT_ID_FIELD.to_string(),
            version_field: DEFAULT_VERSION_FIELD.to_string(),
            seed: None,
            output: None,
        }
    }
}

impl ConverterConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_yaml_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check values that parse but cannot work
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(Error::invalid_value(
                "sample_size",
                "must be greater than zero",
            ));
        }
        if self.id_field.is_empty() {
            return Err(Error::invalid_value("id_field", "must not be empty"));
        }
        if self.version_field.is_empty() {
            return Err(Error::invalid_value("version_field", "must not be empty"));
        }
        Ok(())
    }

    /// Inference settings derived from this configuration
    pub fn inference_config(&self) -> InferenceConfig {
        InferenceConfig::new()
            .with_sample_size(self.sample_size)
            .with_id_field(self.id_field.clone())
            .with_version_field(self.version_field.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
source: ./export
collections: [users, posts]
sample_size: 200
id_field: key
version_field: rev
seed: 42
output: schema.graphql
"#;

        let config = ConverterConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.source, Some(PathBuf::from("./export")));
        assert_eq!(config.collections, vec!["users", "posts"]);
        assert_eq!(config.sample_size, 200);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output, Some(PathBuf::from("schema.graphql")));

        let inference = config.inference_config();
        assert_eq!(inference.sample_size, 200);
        assert!(inference.is_id_field("key"));
        assert!(inference.is_version_field("rev"));
    }

    #[test]
    fn test_parse_partial_yaml_uses_defaults() {
        let config = ConverterConfig::from_yaml_str("sample_size: 10\n").unwrap();
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.id_field, "_id");
        assert_eq!(config.version_field, "__v");
        assert!(config.collections.is_empty());
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config = ConverterConfig::from_yaml_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_parse_json() {
        let config =
            ConverterConfig::from_json_str(r#"{"collections": ["a"], "seed": 1}"#).unwrap();
        assert_eq!(config.collections, vec!["a"]);
        assert_eq!(config.sample_size, 100);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ConverterConfig::from_yaml_str("sample_size: [").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_validate() {
        let config = ConverterConfig {
            sample_size: 0,
            ..ConverterConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sample_size"));

        let config = ConverterConfig {
            id_field: String::new(),
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_err());

        assert!(ConverterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("doc2sdl.yaml");
        std::fs::write(&yaml_path, "collections: [users]\n").unwrap();
        let config = ConverterConfig::from_file(&yaml_path).unwrap();
        assert_eq!(config.collections, vec!["users"]);

        let json_path = dir.path().join("doc2sdl.json");
        std::fs::write(&json_path, r#"{"sample_size": 0}"#).unwrap();
        let err = ConverterConfig::from_file(&json_path).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));

        let err = ConverterConfig::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
