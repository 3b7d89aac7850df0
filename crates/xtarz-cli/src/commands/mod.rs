//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod classify;
pub mod serve;

/// XtarzLab Content Analyzer - topic analysis reports
#[derive(Parser)]
#[command(name = "xtarz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true, env = "XTARZ_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Render an analysis report for a topic
    Analyze(analyze::AnalyzeArgs),

    /// Show which category topics fall into
    Classify(classify::ClassifyArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args),
            Commands::Classify(args) => classify::execute(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["xtarz", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "0.0.0.0");
                assert_eq!(args.port, 5000);
                assert_eq!(args.delay_ms, 2000);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "xtarz", "serve", "--host", "127.0.0.1", "--port", "8080", "--delay-ms", "0",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                let config = args.server_config();
                assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:8080");
                assert!(config.analyzer.processing_delay.is_zero());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_classify_requires_topic() {
        assert!(Cli::try_parse_from(["xtarz", "classify"]).is_err());
        let cli = Cli::try_parse_from(["xtarz", "classify", "AI", "Jazz history"]).unwrap();
        match cli.command {
            Commands::Classify(args) => assert_eq!(args.topics.len(), 2),
            _ => panic!("expected classify"),
        }
    }
}
