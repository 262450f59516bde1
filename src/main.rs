//! Wordsweep main entry point
//!
//! This is the command-line interface for the Wordsweep word-frequency
//! crawler.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wordsweep::config::{load_config_with_hash, Config};
use wordsweep::crawler::{CrawlEngine, Crawler};
use wordsweep::output::{write_result, write_result_to};
use wordsweep::profiler::{ProfiledCrawler, Profiler};

/// Wordsweep: a parallel word-frequency web crawler
///
/// Wordsweep walks the configured start pages to a bounded depth within a
/// wall-clock deadline, counts the words on every page it visits, and writes
/// the most frequent words as JSON.
#[derive(Parser, Debug)]
#[command(name = "wordsweep")]
#[command(version = "0.1.0")]
#[command(about = "A parallel word-frequency web crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        Ok(())
    } else {
        handle_crawl(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wordsweep=info,warn"),
            1 => EnvFilter::new("wordsweep=debug,info"),
            2 => EnvFilter::new("wordsweep=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Wordsweep Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Timeout: {}s", config.crawler.timeout_seconds);
    println!("  Popular word count: {}", config.crawler.popular_word_count);
    println!(
        "  Parallelism: {}",
        config
            .crawler
            .parallelism
            .map(|p| p.to_string())
            .unwrap_or_else(|| "host default".to_string())
    );

    println!("\nStart Pages ({}):", config.crawler.start_pages.len());
    for page in &config.crawler.start_pages {
        println!("  - {}", page);
    }

    println!(
        "\nIgnored URL Patterns ({}):",
        config.crawler.ignored_urls.len()
    );
    for pattern in &config.crawler.ignored_urls {
        println!("  - {}", pattern);
    }

    println!(
        "\nIgnored Word Patterns ({}):",
        config.crawler.ignored_words.len()
    );
    for pattern in &config.crawler.ignored_words {
        println!("  - {}", pattern);
    }

    println!("\nOutput:");
    println!("  Result: {}", display_path(&config.output.result_path));
    println!(
        "  Profile data: {}",
        display_path(&config.output.profile_output_path)
    );

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would start crawling from {} start pages",
        config.crawler.start_pages.len()
    );
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(stdout)"
    } else {
        path
    }
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    let engine = CrawlEngine::from_config(&config.crawler, &config.user_agent)?;

    tracing::info!(
        "Starting crawl: {} start pages, max depth {}, timeout {}s, parallelism ceiling {}",
        config.crawler.start_pages.len(),
        config.crawler.max_depth,
        config.crawler.timeout_seconds,
        engine.max_parallelism()
    );

    let profiler = Profiler::global();
    let crawler = ProfiledCrawler::new(engine, Arc::clone(&profiler));

    let result = crawler.crawl(&config.crawler.start_pages).await;

    tracing::info!(
        "Crawl completed: {} URLs visited, {} ranked words",
        result.urls_visited,
        result.word_counts.len()
    );

    // Write the crawl result (empty path routes to stdout)
    if config.output.result_path.is_empty() {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        write_result_to(&result, &mut lock)?;
    } else {
        write_result(&result, Path::new(&config.output.result_path))?;
        tracing::info!("Result written to {}", config.output.result_path);
    }

    // Write the profile data (empty path routes to stdout)
    if config.output.profile_output_path.is_empty() {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        profiler.write_data(&mut lock)?;
    } else {
        profiler.write_data_to_path(Path::new(&config.output.profile_output_path))?;
        tracing::info!(
            "Profile data written to {}",
            config.output.profile_output_path
        );
    }

    Ok(())
}
