//! Crawler module for web page fetching and word counting
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and HTML parsing into per-page word counts and links
//! - Deadline-bound, depth-limited recursive traversal
//! - Concurrency limiting and structured joins
//! - Overall crawl coordination

mod engine;
mod fetcher;
mod page;
mod source;

pub use engine::CrawlEngine;
pub use fetcher::{build_http_client, fetch_url, FetchedPage};
pub use page::parse_page;
pub use source::{HttpPageSource, PageData, PageSource};

use crate::config::Config;
use crate::output::CrawlResult;
use crate::SweepError;
use async_trait::async_trait;

/// A crawler that walks pages and aggregates word frequencies
///
/// The trait is the seam callers program against: the engine implements it,
/// and interposing layers (such as the profiling decorator) wrap any
/// implementation without the caller knowing the difference.
#[async_trait]
pub trait Crawler: Send + Sync {
    /// Crawls from the given starting URLs and returns the aggregated result
    ///
    /// Never fails: per-branch fetch errors are contained to their branch,
    /// and deadline or depth exhaustion are normal termination. Returns only
    /// after every branch in the crawl tree has completed or been pruned.
    async fn crawl(&self, starting_urls: &[String]) -> CrawlResult;

    /// The host's parallel execution ceiling
    fn max_parallelism(&self) -> usize;
}

/// Runs a complete crawl from a loaded configuration
///
/// Builds the HTTP page source and the crawl engine from `config`, then
/// crawls the configured start pages.
///
/// # Example
///
/// ```no_run
/// use wordsweep::config::load_config;
/// use wordsweep::crawler::crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let result = crawl(&config).await?;
/// println!("Visited {} URLs", result.urls_visited);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config) -> Result<CrawlResult, SweepError> {
    let engine = CrawlEngine::from_config(&config.crawler, &config.user_agent)?;
    Ok(engine.crawl(&config.crawler.start_pages).await)
}
