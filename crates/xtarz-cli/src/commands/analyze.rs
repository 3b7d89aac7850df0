//! Offline report rendering.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use xtarz_core::{AnalyzerConfig, ContentAnalyzer};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Topic to analyze
    pub topic: String,

    /// Write the HTML report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let analyzer = ContentAnalyzer::new(AnalyzerConfig::immediate());
    let report = analyzer.report(&args.topic)?;
    tracing::debug!(category = %report.category, bytes = report.html.len(), "Rendered report");

    match args.output {
        Some(path) => {
            std::fs::write(&path, &report.html)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            output::print_report_written(&report, &path);
        }
        None => print!("{}", report.html),
    }

    Ok(())
}
