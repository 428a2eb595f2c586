//! srcdump CLI
//!
//! Command-line interface for dumping a source tree into a single text
//! snapshot with per-file headers.

use anyhow::{Context, Result};
use clap::Parser;
use srcdump_core::{FileOutcome, ScrapeConfig, Scraper};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srcdump")]
#[command(about = "srcdump - Dump relevant source files into a single text snapshot")]
#[command(version)]
struct Cli {
    /// Root directory to scrape (default: current directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Load scrape rules from a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Simple logging for CLI
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_target(false).init();
    }

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScrapeConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScrapeConfig::load(&cli.root),
    };

    println!(
        "Starting scrape... Outputting to {}",
        config.output_path.display()
    );

    let scraper = Scraper::new(config);
    let report = scraper
        .run(&cli.root)
        .context("Scrape aborted before completion")?;

    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Scraped(path) => println!("Scraped: {}", path.display()),
            FileOutcome::Failed { path, message } => {
                println!("Error reading {}: {}", path.display(), message)
            }
        }
    }

    println!(
        "\n--- Success! All relevant files dumped into {} ---",
        report.output_path.display()
    );

    Ok(())
}
