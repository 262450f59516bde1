//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with a proper user agent string
//! - GET requests for page content
//! - Status and Content-Type gating
//! - Error classification

use crate::config::UserAgentConfig;
use crate::SweepError;
use reqwest::Client;
use std::time::Duration;

/// A successfully fetched HTML page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects; relative links resolve against this
    pub final_url: String,

    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use wordsweep::config::UserAgentConfig;
/// use wordsweep::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "wordsweep".to_string(),
///     crawler_version: "0.1".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version
    let user_agent = format!("{}/{}", config.crawler_name, config.crawler_version);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its HTML body
///
/// Classification of failures:
///
/// | Condition | Error |
/// |-----------|-------|
/// | Request timeout | `SweepError::Timeout` |
/// | Connection/transport failure | `SweepError::Http` |
/// | Non-2xx status | `SweepError::HttpStatus` |
/// | Content-Type is not `text/html` | `SweepError::ContentMismatch` |
///
/// All of these are branch-local: the caller logs and drops the branch
/// without affecting the rest of the crawl.
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchedPage, SweepError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            SweepError::Timeout {
                url: url.to_string(),
            }
        } else {
            SweepError::Http {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SweepError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return Err(SweepError::ContentMismatch {
            url: url.to_string(),
            content_type,
        });
    }

    let final_url = response.url().to_string();

    let body = response.text().await.map_err(|e| SweepError::Http {
        url: url.to_string(),
        source: e,
    })?;

    Ok(FetchedPage { final_url, body })
}
