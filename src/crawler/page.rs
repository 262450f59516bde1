//! HTML parsing into per-page word counts and outbound links
//!
//! A fetched page is reduced to exactly the two things the crawl needs:
//! - A mapping from word to occurrence count over the page's visible text
//! - The outbound links to follow (absolute URLs)

use crate::crawler::source::PageData;
use crate::url::PatternSet;
use scraper::{Html, Node, Selector};
use std::collections::HashMap;
use url::Url;

/// Parses HTML content into word counts and outbound links
///
/// Words are lowercased alphanumeric runs taken from the body's visible text
/// (script, style, and noscript content is skipped); a word fully matching
/// any ignored-word pattern is not counted. Links follow the extraction
/// rules of [`extract_links`].
pub fn parse_page(html: &str, base_url: &Url, ignored_words: &PatternSet) -> PageData {
    let document = Html::parse_document(html);

    let word_counts = count_words(&document, ignored_words);
    let links = extract_links(&document, base_url);

    PageData { word_counts, links }
}

/// Counts words in the document's visible body text
fn count_words(document: &Html, ignored_words: &PatternSet) -> HashMap<String, u64> {
    let mut counts = HashMap::new();

    for raw in visible_body_text(document).split(|c: char| !c.is_alphanumeric()) {
        if raw.is_empty() {
            continue;
        }
        let word = raw.to_lowercase();
        if ignored_words.matches(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    counts
}

/// Collects the text of the document body, skipping unrendered elements
fn visible_body_text(document: &Html) -> String {
    let body_selector = match Selector::parse("body") {
        Ok(selector) => selector,
        Err(_) => return String::new(),
    };

    let body = match document.select(&body_selector).next() {
        Some(body) => body,
        None => return String::new(),
    };

    let mut text = String::new();
    for node in body.descendants() {
        if let Node::Text(fragment) = node.value() {
            let unrendered = node.ancestors().any(|ancestor| {
                matches!(
                    ancestor.value(),
                    Node::Element(el) if matches!(el.name(), "script" | "style" | "noscript")
                )
            });
            if unrendered {
                continue;
            }
            text.push_str(&fragment.text);
            text.push(' ');
        }
    }

    text
}

/// Extracts all valid links from the HTML document
///
/// **Include:** `<a href="...">` anchors, resolved against `base_url`.
///
/// **Exclude:**
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Fragment-only hrefs (same-page anchors)
/// - Anything that does not resolve to http(s)
fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            // Skip if it has the download attribute
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

/// Resolves a link href to an absolute URL and validates it
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
