//! Cyrillic Crawler main entry point
//!
//! This is the command-line interface for the Cyrillic page collector.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cyrillic_crawler::config::{read_config_with_hash, validate, Config, ConfigOverrides};
use cyrillic_crawler::crawler::run_crawl;
use cyrillic_crawler::output::{load_index_summary, print_index_summary, print_report};
use cyrillic_crawler::ConfigError;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Cyrillic Crawler: collects Russian-language pages
///
/// Starting from the seed URLs, the crawler follows links breadth-first and
/// saves the visible text of every page with enough Cyrillic words, until the
/// page target is reached or no links are left.
#[derive(Parser, Debug)]
#[command(name = "cyrillic-crawler")]
#[command(version = "1.0.0")]
#[command(about = "A breadth-first collector of Cyrillic web pages", long_about = None)]
struct Cli {
    /// Seed URLs, added to those from the configuration file
    #[arg(value_name = "SEEDS")]
    seeds: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of pages to save before stopping
    #[arg(short, long, value_name = "N")]
    pages: Option<u64>,

    /// Minimum number of Cyrillic words for a page to be saved
    #[arg(long, value_name = "N")]
    min_words: Option<usize>,

    /// Delay after each request, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Path of the index file
    #[arg(long, value_name = "FILE")]
    index: Option<String>,

    /// Directory for saved page texts
    #[arg(long, value_name = "DIR")]
    pages_dir: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics of an existing index and pages directory and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seeds: self.seeds.clone(),
            target_pages: self.pages,
            min_words: self.min_words,
            delay_ms: self.delay_ms,
            index_path: self.index.clone(),
            pages_dir: self.pages_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = read_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };
    config.apply_overrides(cli.overrides());

    if cli.stats {
        return handle_stats(&config);
    }

    match validate(&config) {
        Ok(()) => {}
        Err(ConfigError::NoSeeds) => {
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("cyrillic_crawler=info,warn"),
            1 => EnvFilter::new("cyrillic_crawler=debug,info"),
            2 => EnvFilter::new("cyrillic_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== Cyrillic Crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Target pages: {}", config.crawler.target_pages);
    println!("  Minimum Cyrillic words: {}", config.crawler.min_words);
    println!("  Delay between requests: {}ms", config.crawler.delay_ms);

    println!("\nFetcher:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!("  Timeout: {}s", config.fetcher.timeout_secs);

    println!("\nOutput:");
    println!("  Index: {}", config.output.index_path);
    println!("  Pages directory: {}", config.output.pages_dir);

    println!("\nSeeds ({}):", config.crawler.seeds.len());
    for seed in &config.crawler.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the --stats mode: verifies and summarizes existing output
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Index: {}", config.output.index_path);
    println!("Pages: {}\n", config.output.pages_dir);

    let summary = load_index_summary(
        Path::new(&config.output.index_path),
        Path::new(&config.output.pages_dir),
    )?;
    print_index_summary(&summary);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    tracing::info!(
        "Saving pages with at least {} Cyrillic words to {}",
        config.crawler.min_words,
        config.output.pages_dir
    );

    match run_crawl(config).await {
        Ok(report) => {
            tracing::info!("Crawl completed successfully");
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
