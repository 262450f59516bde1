//! Visited-URL tracking with atomic claims

use dashmap::DashSet;

/// Concurrently-shared set of URLs that have already been claimed by a branch
///
/// Every branch must win a claim before fetching its URL, so a page is
/// processed at most once per crawl even when several branches discover it
/// simultaneously. Entries are never removed; a tracker lives for exactly one
/// crawl invocation.
#[derive(Debug, Default)]
pub struct VisitTracker {
    urls: DashSet<String>,
}

impl VisitTracker {
    /// Creates an empty tracker for a new crawl invocation
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims a URL for the calling branch
    ///
    /// Returns `true` if this caller is the first to claim `url`, `false` if
    /// another branch already holds the claim. The test and the set are a
    /// single linearizable operation, so exactly one concurrent caller wins.
    pub fn claim(&self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }

    /// Number of URLs claimed so far
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if no URL has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
