//! The profiling decorator over the `Crawler` trait

use crate::crawler::Crawler;
use crate::output::CrawlResult;
use crate::profiler::registry::Profiler;
use async_trait::async_trait;
use std::sync::Arc;

/// Operations measured when invoked through the decorator
const PROFILED_OPERATIONS: &[&str] = &["crawl"];

/// A `Crawler` that times profiled operations of the crawler it wraps
///
/// The wrapped crawler cannot tell it is being measured: arguments, results,
/// and panics pass through unchanged, and operations outside
/// [`PROFILED_OPERATIONS`] are plain delegation.
pub struct ProfiledCrawler<C> {
    inner: C,
    profiler: Arc<Profiler>,
}

impl<C> ProfiledCrawler<C> {
    /// Wraps a crawler, recording into the given registry
    pub fn new(inner: C, profiler: Arc<Profiler>) -> Self {
        Self { inner, profiler }
    }

    fn is_profiled(operation: &str) -> bool {
        PROFILED_OPERATIONS.contains(&operation)
    }

    /// The wrapped type's bare name, used as the registry's target key
    fn target_name() -> &'static str {
        std::any::type_name::<C>()
            .rsplit("::")
            .next()
            .unwrap_or("unknown")
    }
}

#[async_trait]
impl<C: Crawler + 'static> Crawler for ProfiledCrawler<C> {
    async fn crawl(&self, starting_urls: &[String]) -> CrawlResult {
        if !Self::is_profiled("crawl") {
            return self.inner.crawl(starting_urls).await;
        }

        // The timer records on drop, so the measurement lands on every exit
        // path, panics included
        let _timer = self.profiler.start(Self::target_name(), "crawl");
        self.inner.crawl(starting_urls).await
    }

    fn max_parallelism(&self) -> usize {
        // Not in the profiled table: pass through unmeasured
        self.inner.max_parallelism()
    }
}
