//! The concurrent crawl engine
//!
//! Traversal is a tree of tasks: one root branch per starting URL, one child
//! branch per discovered link. Every branch runs the same steps:
//!
//! 1. Stop if depth is exhausted or the deadline has passed
//! 2. Stop if the URL matches an ignore pattern
//! 3. Claim the URL; stop if another branch already holds the claim
//! 4. Fetch and parse the page (bounded by the fetch semaphore)
//! 5. Merge the page's word counts into the shared tally
//! 6. Spawn a child branch per outbound link at depth - 1, then wait for
//!    every child to finish
//!
//! The deadline is re-checked at each branch entry rather than signalled to
//! in-flight work: a branch that has already committed to a fetch finishes
//! that one fetch even if the deadline lapses mid-flight, so a crawl can
//! modestly overrun its timeout under load. This is documented behavior.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::crawler::fetcher::build_http_client;
use crate::crawler::source::{HttpPageSource, PageSource};
use crate::crawler::Crawler;
use crate::output::CrawlResult;
use crate::ranking::rank;
use crate::state::{VisitTracker, WordTally};
use crate::url::PatternSet;
use crate::SweepError;
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// The concurrent, deadline-bound, depth-limited crawl engine
pub struct CrawlEngine {
    source: Arc<dyn PageSource>,
    ignored_urls: Arc<PatternSet>,
    max_depth: u32,
    timeout: Duration,
    popular_word_count: usize,
    fetch_permits: Arc<Semaphore>,
}

/// Everything a branch needs, shared across the whole crawl tree
struct BranchContext {
    source: Arc<dyn PageSource>,
    ignored_urls: Arc<PatternSet>,
    visited: VisitTracker,
    tally: WordTally,
    fetch_permits: Arc<Semaphore>,
    deadline: Instant,
}

impl CrawlEngine {
    /// Creates an engine over an arbitrary page source
    ///
    /// `parallelism` is the requested concurrent-fetch ceiling; the effective
    /// ceiling is `min(parallelism, max_parallelism())`, and absent means
    /// host parallelism.
    pub fn new(
        source: Arc<dyn PageSource>,
        ignored_urls: PatternSet,
        max_depth: u32,
        timeout: Duration,
        popular_word_count: usize,
        parallelism: Option<usize>,
    ) -> Self {
        let ceiling = host_parallelism();
        let permits = parallelism.unwrap_or(ceiling).min(ceiling).max(1);

        Self {
            source,
            ignored_urls: Arc::new(ignored_urls),
            max_depth,
            timeout,
            popular_word_count,
            fetch_permits: Arc::new(Semaphore::new(permits)),
        }
    }

    /// Creates the production engine from configuration
    ///
    /// Builds the HTTP client and compiles both pattern sets; any problem is
    /// surfaced here, before the crawl begins.
    pub fn from_config(
        crawler: &CrawlerConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, SweepError> {
        let client = build_http_client(user_agent)?;
        let ignored_words = PatternSet::compile(&crawler.ignored_words)?;
        let ignored_urls = PatternSet::compile(&crawler.ignored_urls)?;

        let source = Arc::new(HttpPageSource::new(client, ignored_words));

        Ok(Self::new(
            source,
            ignored_urls,
            crawler.max_depth,
            crawler.timeout(),
            crawler.popular_word_count,
            crawler.parallelism,
        ))
    }
}

#[async_trait]
impl Crawler for CrawlEngine {
    async fn crawl(&self, starting_urls: &[String]) -> CrawlResult {
        let deadline = compute_deadline(self.timeout);

        // Fresh shared state per invocation
        let ctx = Arc::new(BranchContext {
            source: Arc::clone(&self.source),
            ignored_urls: Arc::clone(&self.ignored_urls),
            visited: VisitTracker::new(),
            tally: WordTally::new(),
            fetch_permits: Arc::clone(&self.fetch_permits),
            deadline,
        });

        // max_depth bounds recursion below the roots; every starting URL
        // gets exactly one traversal step even at max_depth = 0
        let root_depth = self.max_depth.max(1);

        let mut roots = JoinSet::new();
        for url in starting_urls {
            roots.spawn(crawl_branch(Arc::clone(&ctx), url.clone(), root_depth));
        }

        // Structured join: crawl() returns only once every root subtree has
        // completed or been pruned
        while let Some(joined) = roots.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Root branch task failed: {}", e);
            }
        }

        let snapshot = ctx.tally.snapshot();
        let urls_visited = ctx.visited.len();

        tracing::info!(
            urls_visited,
            distinct_words = snapshot.len(),
            "crawl finished"
        );

        CrawlResult::new(rank(&snapshot, self.popular_word_count), urls_visited)
    }

    fn max_parallelism(&self) -> usize {
        host_parallelism()
    }
}

/// One traversal step for a single URL at a given remaining depth
///
/// Boxed because the recursion happens through spawned child tasks; each
/// child is itself a `crawl_branch` future.
fn crawl_branch(
    ctx: Arc<BranchContext>,
    url: String,
    remaining_depth: u32,
) -> BoxFuture<'static, ()> {
    async move {
        // Depth or deadline exhaustion is normal termination, not failure
        if remaining_depth == 0 || Instant::now() >= ctx.deadline {
            return;
        }

        if ctx.ignored_urls.matches(&url) {
            tracing::debug!(%url, "URL matches ignore pattern, pruning branch");
            return;
        }

        // Exactly one branch wins, even under concurrent discovery
        if !ctx.visited.claim(&url) {
            return;
        }

        let page = {
            // Permit held only across the fetch, never across the child
            // join, so deep trees cannot starve the pool
            let _permit = match ctx.fetch_permits.acquire().await {
                Ok(permit) => permit,
                // The semaphore is never closed while branches are running
                Err(_) => return,
            };

            match ctx.source.fetch_and_parse(&url).await {
                Ok(page) => page,
                Err(e) => {
                    // Branch-local failure: this page contributes no words
                    // and no links; siblings and ancestors are unaffected
                    tracing::warn!(%url, "fetch failed: {}", e);
                    return;
                }
            }
        };

        ctx.tally.add_all(&page.word_counts);

        let mut children = JoinSet::new();
        for link in page.links {
            children.spawn(crawl_branch(Arc::clone(&ctx), link, remaining_depth - 1));
        }

        // A branch completes only after its whole subtree completes
        while let Some(joined) = children.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Child branch task failed: {}", e);
            }
        }
    }
    .boxed()
}

/// Number of parallel execution units on this host
fn host_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Absolute deadline for a crawl starting now
fn compute_deadline(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout)
        .unwrap_or_else(|| now + Duration::from_secs(86_400 * 365))
}
