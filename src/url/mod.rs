//! URL filtering for the crawler
//!
//! Ignore rules are expressed as regular expressions compiled once at
//! startup; a URL that fully matches any pattern is never fetched.

mod filter;

// Re-export main types
pub use filter::PatternSet;
