//! Top-K ranking of aggregated word counts
//!
//! Runs once, after the crawl tree has fully joined, over an immutable
//! snapshot of the tally. Pure and deterministic: the same snapshot and limit
//! always produce the same ordered sequence.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranks word counts and keeps the top `limit` entries
///
/// Ordering precedence:
///
/// 1. Higher count first
/// 2. Longer word first when counts tie
/// 3. Lexicographically smaller word first when both tie
///
/// Words are unique keys, so this is a total order and the output is fully
/// deterministic. The returned vector's positional order is the rank order;
/// its length is `min(limit, distinct words)`.
pub fn rank(counts: &HashMap<String, u64>, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();

    entries.sort_unstable_by(|a, b| compare_entries(a, b));
    entries.truncate(limit);
    entries
}

/// The three-level word-count comparator
fn compare_entries(a: &(String, u64), b: &(String, u64)) -> Ordering {
    b.1.cmp(&a.1)
        .then_with(|| b.0.len().cmp(&a.0.len()))
        .then_with(|| a.0.cmp(&b.0))
}
