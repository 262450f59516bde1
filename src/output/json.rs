//! The crawl result value and its JSON writer

use crate::Result;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The terminal output of one crawl invocation
///
/// Immutable once constructed. `word_counts` is positionally ordered: index
/// 0 is the top-ranked word, and the JSON object emitted for it preserves
/// that order key by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    /// Ranked (word, count) pairs; insertion order is rank order
    #[serde(rename = "wordCounts", serialize_with = "serialize_word_counts")]
    pub word_counts: Vec<(String, u64)>,

    /// Number of distinct URLs claimed during the crawl
    #[serde(rename = "urlsVisited")]
    pub urls_visited: usize,
}

impl CrawlResult {
    /// Creates a result from ranked word counts and the visited total
    pub fn new(word_counts: Vec<(String, u64)>, urls_visited: usize) -> Self {
        Self {
            word_counts,
            urls_visited,
        }
    }
}

/// Serializes the ranked pairs as a JSON object, preserving their order
fn serialize_word_counts<S>(counts: &[(String, u64)], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(counts.len()))?;
    for (word, count) in counts {
        map.serialize_entry(word, count)?;
    }
    map.end()
}

/// Writes a crawl result as one JSON document to the given writer
pub fn write_result_to(result: &CrawlResult, writer: &mut impl Write) -> Result<()> {
    serde_json::to_writer(&mut *writer, result)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes a crawl result as JSON to the given path
///
/// An existing file is kept and the new document appended to it, one
/// document per line; the file is created if absent.
pub fn write_result(result: &CrawlResult, path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    write_result_to(result, &mut writer)?;
    writer.flush()?;
    Ok(())
}
