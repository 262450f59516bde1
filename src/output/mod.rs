//! Output module for crawl results
//!
//! This module owns the terminal value of a crawl and its JSON
//! serialization. The word map serializes in rank order, so downstream
//! consumers see the same ordering the ranker produced.

mod json;

pub use json::{write_result, write_result_to, CrawlResult};
