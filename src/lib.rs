//! Wordsweep: a parallel word-frequency web crawler
//!
//! This crate implements a web crawler that walks a set of start pages to a
//! bounded depth within a wall-clock deadline, counts the words on every page
//! it visits, and reports the most frequent words across the whole crawl.

pub mod config;
pub mod crawler;
pub mod output;
pub mod profiler;
pub mod ranking;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Wordsweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Expected HTML for {url}, got {content_type}")]
    ContentMismatch { url: String, content_type: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Result type alias for Wordsweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, CrawlEngine, Crawler, PageData, PageSource};
pub use output::CrawlResult;
pub use ranking::rank;
pub use state::{VisitTracker, WordTally};
pub use url::PatternSet;
