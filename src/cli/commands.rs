//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer a GraphQL schema from sampled documents
#[derive(Parser, Debug)]
#[command(name = "doc2sdl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of collection exports (<name>.json, <name>.jsonl)
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the schema document
    Generate {
        /// Collections to convert (comma-separated, empty = all)
        #[arg(long)]
        collections: Option<String>,

        /// Documents sampled per collection
        #[arg(long)]
        sample_size: Option<usize>,

        /// Fixed sampling seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List collection names in the source
    Collections,

    /// Show the analyzed fields of one collection as JSON
    Inspect {
        /// Collection to analyze
        collection: String,

        /// Documents sampled
        #[arg(long)]
        sample_size: Option<usize>,
    },
}

/// Split a comma-separated list, dropping blanks
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
