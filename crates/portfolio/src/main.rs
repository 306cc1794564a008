//! Portfolio CLI application.
//!
//! Runs one retrieval cycle, classifies the repositories and prints the
//! portfolio page for the chosen category.

use anyhow::{Context, Result};
use clap::Parser;
use portfolio::{PageModel, WorkingSet};
use repo_fetcher::RepositoryFetcher;
use shared::{Config, LogConfig, Selection};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Category to show ("all", "data-science", "websites", "other")
    #[arg(long, default_value = "all")]
    category: Selection,

    /// Print the page model as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    shared::logging::init(LogConfig::from_config(&config, "portfolio", args.verbose))?;

    info!(account = %config.github.account, "Portfolio starting");

    let fetcher = RepositoryFetcher::new(&config.github).context("Failed to create fetcher")?;
    let outcome = fetcher.fetch_repositories().await;

    let mut working_set = WorkingSet::from_outcome(outcome);
    if let Some(diagnostic) = working_set.diagnostic() {
        warn!(diagnostic = %diagnostic, "Showing fallback projects");
    }
    working_set.select(args.category);

    let page = PageModel::build(&working_set, &config.site);
    info!(
        selection = %args.category,
        visible = page.projects.len(),
        total = working_set.count(Selection::All),
        "Page built"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&page).context("Failed to serialize page")?;
        println!("{}", json);
    } else {
        print!("{}", page.render_text());
    }

    Ok(())
}
