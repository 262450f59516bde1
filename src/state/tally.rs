//! Concurrent word-count aggregation

use dashmap::DashMap;
use std::collections::HashMap;

/// Concurrently-shared mapping from word to running total count
///
/// Branches merge their page's counts as they finish parsing; each per-word
/// addition is atomic, so concurrent merges never lose an increment. Counts
/// only ever grow. The engine reads a snapshot once all branches have joined.
#[derive(Debug, Default)]
pub struct WordTally {
    counts: DashMap<String, u64>,
}

impl WordTally {
    /// Creates an empty tally for a new crawl invocation
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a page's word counts into the running totals
    ///
    /// Equivalent to a per-word atomic fetch-and-add for every entry in
    /// `page_counts`.
    pub fn add_all(&self, page_counts: &HashMap<String, u64>) {
        for (word, count) in page_counts {
            *self.counts.entry(word.clone()).or_insert(0) += count;
        }
    }

    /// Number of distinct words counted so far
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no word has been counted yet
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Copies the current totals into a plain map
    ///
    /// Meaningful only after all concurrent mutation has ceased; the engine
    /// calls this once the crawl tree has fully joined.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}
