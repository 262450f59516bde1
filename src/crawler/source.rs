//! The page-source seam between the engine and the network
//!
//! The crawl engine never talks HTTP directly: it asks a [`PageSource`] for
//! the word counts and outbound links of a URL. Production wires in
//! [`HttpPageSource`]; tests substitute an in-memory source.

use crate::crawler::fetcher::fetch_url;
use crate::crawler::page::parse_page;
use crate::url::PatternSet;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use url::Url;

/// Everything the crawl needs from one fetched page
#[derive(Debug, Clone, Default)]
pub struct PageData {
    /// Word to occurrence count over the page's visible text
    pub word_counts: HashMap<String, u64>,

    /// Outbound links to follow (absolute URLs)
    pub links: Vec<String>,
}

/// Fetches a URL and reduces it to word counts and links
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches and parses one page
    ///
    /// May suspend the calling task for the duration of the fetch. A failure
    /// here is branch-local by contract: callers treat it as a page with no
    /// words and no links.
    async fn fetch_and_parse(&self, url: &str) -> Result<PageData>;
}

/// The production page source: reqwest fetch, scraper parse
pub struct HttpPageSource {
    client: Client,
    ignored_words: PatternSet,
}

impl HttpPageSource {
    /// Creates a page source over an already-built HTTP client
    pub fn new(client: Client, ignored_words: PatternSet) -> Self {
        Self {
            client,
            ignored_words,
        }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_and_parse(&self, url: &str) -> Result<PageData> {
        let fetched = fetch_url(&self.client, url).await?;

        // Relative links resolve against the URL the server actually served
        let base = Url::parse(&fetched.final_url)?;

        Ok(parse_page(&fetched.body, &base, &self.ignored_words))
    }
}
