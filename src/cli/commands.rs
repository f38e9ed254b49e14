//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Base Hiring data bridge
#[derive(Parser, Debug)]
#[command(name = "hiring-bridge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Access token (overrides BASE_API_KEY)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Output format for printed results
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server mode
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List active job openings
    Openings,

    /// List active stages of an opening
    Stages {
        #[arg(long)]
        opening_id: String,
    },

    /// Fetch normalized candidates of an opening
    Candidates {
        #[arg(long, required_unless_present = "url")]
        opening_id: Option<String>,

        /// Stages to keep (comma-separated, empty = all)
        #[arg(long)]
        stage_ids: Option<String>,

        /// Candidate board link (https://hiring.base.vn/opening/candidates/<id>?stage=<id>)
        #[arg(long, conflicts_with_all = ["opening_id", "stage_ids"])]
        url: Option<String>,

        /// Write a CSV file instead of printing JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an opening's job description as plain text
    JobDescription {
        #[arg(long)]
        opening_id: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidates() {
        let cli = Cli::parse_from([
            "hiring-bridge",
            "--token",
            "abc",
            "candidates",
            "--opening-id",
            "42",
            "--stage-ids",
            "1,2",
            "-o",
            "out.csv",
        ]);

        assert_eq!(cli.token.as_deref(), Some("abc"));
        match cli.command {
            Commands::Candidates {
                opening_id,
                stage_ids,
                url,
                output,
            } => {
                assert_eq!(opening_id.as_deref(), Some("42"));
                assert!(url.is_none());
                assert_eq!(stage_ids.as_deref(), Some("1,2"));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["hiring-bridge", "serve", "--port", "8000", "-v", "-f", "pretty"]);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(
            cli.command,
            Commands::Serve {
                host: None,
                port: Some(8000)
            }
        ));
    }

    #[test]
    fn test_candidates_from_url() {
        let cli = Cli::parse_from([
            "hiring-bridge",
            "candidates",
            "--url",
            "https://hiring.base.vn/opening/candidates/42?stage=7",
        ]);
        assert!(matches!(
            cli.command,
            Commands::Candidates { opening_id: None, url: Some(_), .. }
        ));
    }

    #[test]
    fn test_candidates_needs_opening_or_url() {
        assert!(Cli::try_parse_from(["hiring-bridge", "candidates"]).is_err());
        assert!(Cli::try_parse_from([
            "hiring-bridge",
            "candidates",
            "--opening-id",
            "42",
            "--url",
            "https://hiring.base.vn/opening/candidates/42?stage=7",
        ])
        .is_err());
    }

    #[test]
    fn test_stages_requires_opening_id() {
        assert!(Cli::try_parse_from(["hiring-bridge", "stages"]).is_err());
    }
}
