//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use xtarz_core::config::{DEFAULT_HOST, DEFAULT_PORT};
use xtarz_core::{AnalyzerConfig, ServerConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "XTARZ_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "XTARZ_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Simulated processing delay per analysis, in milliseconds
    #[arg(long, env = "XTARZ_DELAY_MS", default_value_t = 2000)]
    pub delay_ms: u64,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            analyzer: AnalyzerConfig::with_delay_ms(self.delay_ms),
        }
    }
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    println!();
    println!(
        "  {} {}",
        "XtarzLab".cyan().bold(),
        "Content Analyzer".bold()
    );
    println!();
    println!(
        "  {}  http://{}:{}",
        "Landing page".green(),
        args.host,
        args.port
    );
    println!(
        "  {}       http://{}:{}/api/analyze",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!(
        "  {}        http://{}:{}/api/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    xtarz_web::run_server(config).await?;

    Ok(())
}
