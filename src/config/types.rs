use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Wordsweep
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URLs the crawl starts from; an empty list yields an empty result
    #[serde(rename = "start-pages", default)]
    pub start_pages: Vec<String>,

    /// Maximum recursion depth below the start pages
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Wall-clock budget for the whole crawl, in seconds
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: u64,

    /// How many of the most frequent words to keep in the result
    #[serde(rename = "popular-word-count")]
    pub popular_word_count: usize,

    /// Concurrent fetch ceiling; defaults to the host's parallelism
    #[serde(default)]
    pub parallelism: Option<usize>,

    /// URLs fully matching any of these patterns are never visited
    #[serde(rename = "ignored-urls", default)]
    pub ignored_urls: Vec<String>,

    /// Words fully matching any of these patterns are not counted
    #[serde(rename = "ignored-words", default)]
    pub ignored_words: Vec<String>,
}

impl CrawlerConfig {
    /// The crawl timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path for the JSON crawl result; empty writes to stdout
    #[serde(rename = "result-path", default)]
    pub result_path: String,

    /// Path for the profiling report; empty writes to stdout
    #[serde(rename = "profile-output-path", default)]
    pub profile_output_path: String,
}
