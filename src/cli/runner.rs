//! CLI runner - executes commands

use crate::cli::commands::{parse_list, Cli, Commands};
use crate::config::ConverterConfig;
use crate::engine::SchemaConverter;
use crate::error::{Error, Result};
use crate::output::write_schema;
use crate::schema::{CollectionAnalyzer, InferenceContext};
use crate::source::{DocumentSource, JsonDirSource};
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                collections,
                sample_size,
                seed,
                output,
            } => {
                let mut config = self.load_config()?;
                if let Some(list) = collections {
                    config.collections = parse_list(list);
                }
                if let Some(size) = sample_size {
                    config.sample_size = *size;
                }
                if seed.is_some() {
                    config.seed = *seed;
                }
                if output.is_some() {
                    config.output.clone_from(output);
                }
                config.validate()?;
                self.generate(&config).await
            }
            Commands::Collections => {
                let config = self.load_config()?;
                self.collections(&config).await
            }
            Commands::Inspect {
                collection,
                sample_size,
            } => {
                let mut config = self.load_config()?;
                if let Some(size) = sample_size {
                    config.sample_size = *size;
                }
                config.validate()?;
                self.inspect(&config, collection).await
            }
        }
    }

    /// Load configuration: file first, then global flag overrides
    fn load_config(&self) -> Result<ConverterConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ConverterConfig::from_file(path)?,
            None => ConverterConfig::default(),
        };
        if let Some(source) = &self.cli.source {
            config.source = Some(source.clone());
        }
        Ok(config)
    }

    /// Build the document source
    fn build_source(config: &ConverterConfig) -> Result<JsonDirSource> {
        let root = config.source.as_ref().ok_or_else(|| {
            Error::config("Source directory not specified (use --source or set `source` in the config file)")
        })?;
        Ok(JsonDirSource::new(root).with_optional_seed(config.seed))
    }

    /// Generate the schema document
    async fn generate(&self, config: &ConverterConfig) -> Result<()> {
        let source = Self::build_source(config)?;
        tracing::info!(source = %source.root().display(), "Generating schema");

        let converter =
            SchemaConverter::from_source(source).with_config(config.inference_config());
        let schema = if config.collections.is_empty() {
            converter.convert_all().await?
        } else {
            converter.convert(&config.collections).await?
        };

        if schema.stats.empty_collections > 0 {
            tracing::warn!(
                count = schema.stats.empty_collections,
                "Some collections sampled no documents"
            );
        }

        write_schema(config.output.as_deref(), &schema.to_sdl()).await
    }

    /// List collection names
    async fn collections(&self, config: &ConverterConfig) -> Result<()> {
        let source = Self::build_source(config)?;
        let names = source.list_collections().await?;
        for name in names {
            println!("{name}");
        }
        Ok(())
    }

    /// Print the analysis of one collection
    async fn inspect(&self, config: &ConverterConfig, collection: &str) -> Result<()> {
        let source = Self::build_source(config)?;
        let mut ctx = InferenceContext::new(config.inference_config());
        let schema = CollectionAnalyzer::new(&source)
            .analyze(collection, &mut ctx)
            .await?;

        let report = json!({
            "collection": schema.collection,
            "type": schema.type_name,
            "sampled": schema.sampled,
            "fields": schema.fields,
            "nested_types": ctx.registry(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
