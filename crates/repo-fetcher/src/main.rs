//! Repository fetcher CLI application.
//!
//! Runs one retrieval cycle and prints the outcome as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use repo_fetcher::RepositoryFetcher;
use shared::{Config, LogConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    shared::logging::init(LogConfig::from_config(&config, "repo-fetcher", args.verbose))?;

    info!(
        account = %config.github.account,
        config_file = %args.config.display(),
        "Repository fetcher starting"
    );

    let fetcher = RepositoryFetcher::new(&config.github).context("Failed to create fetcher")?;
    let outcome = fetcher.fetch_repositories().await;

    let json = serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?;
    println!("{}", json);

    Ok(())
}
