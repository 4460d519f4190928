//! CLI module
//!
//! Command-line interface for running conversions.
//!
//! # Commands
//!
//! - `generate` - Write the inferred schema document
//! - `collections` - List collection names in the source
//! - `inspect` - Show the field analysis of one collection

mod commands;
mod runner;

pub use commands::{parse_list, Cli, Commands};
pub use runner::Runner;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("users, posts,,tags "), vec!["users", "posts", "tags"]);
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn test_parse_generate_args() {
        let cli = Cli::parse_from([
            "doc2sdl",
            "--source",
            "./export",
            "generate",
            "--collections",
            "users,posts",
            "--sample-size",
            "50",
            "-o",
            "schema.graphql",
        ]);

        assert_eq!(cli.source, Some(std::path::PathBuf::from("./export")));
        match cli.command {
            Commands::Generate {
                collections,
                sample_size,
                seed,
                output,
            } => {
                assert_eq!(collections.as_deref(), Some("users,posts"));
                assert_eq!(sample_size, Some(50));
                assert_eq!(seed, None);
                assert_eq!(output, Some(std::path::PathBuf::from("schema.graphql")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_inspect_with_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["doc2sdl", "inspect", "users", "-v", "-s", "dir"]);
        assert!(cli.verbose);
        assert_eq!(cli.source, Some(std::path::PathBuf::from("dir")));
        assert!(matches!(cli.command, Commands::Inspect { ref collection, .. } if collection == "users"));
    }

    #[tokio::test]
    async fn test_runner_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("posts.json"),
            r#"[{"_id": {"$oid": "507f191e810c19729de860ea"}, "title": "A", "__v": 0}]"#,
        )
        .unwrap();
        let out = dir.path().join("schema.graphql");

        let cli = Cli::parse_from([
            "doc2sdl".to_string(),
            "--source".to_string(),
            dir.path().display().to_string(),
            "generate".to_string(),
            "-o".to_string(),
            out.display().to_string(),
        ]);
        Runner::new(cli).run().await.unwrap();

        let sdl = std::fs::read_to_string(&out).unwrap();
        assert_eq!(
            sdl,
            "type Post {\n  id: ID!\n  title: String!\n}\n\n\
             type Query {\n  posts: [Post!]!\n  post(id: ID!): Post\n}\n"
        );
    }

    #[tokio::test]
    async fn test_runner_requires_source() {
        let cli = Cli::parse_from(["doc2sdl", "collections"]);
        let err = Runner::new(cli).run().await.unwrap_err();
        assert!(err.to_string().contains("Source directory not specified"));
    }

    #[tokio::test]
    async fn test_runner_rejects_zero_sample_size() {
        let cli = Cli::parse_from(["doc2sdl", "-s", ".", "generate", "--sample-size", "0"]);
        let err = Runner::new(cli).run().await.unwrap_err();
        assert!(err.to_string().contains("sample_size"));
    }
}
