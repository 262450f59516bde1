//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full crawl cycle end-to-end: fetch, parse, dedup, word tallying, and
//! ranking.

use std::collections::HashMap;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordsweep::config::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use wordsweep::crawler::crawl;
use wordsweep::output::{write_result, CrawlResult};

/// Creates a test configuration crawling from the given start pages
fn test_config(start_pages: Vec<String>) -> Config {
    Config {
        crawler: CrawlerConfig {
            start_pages,
            max_depth: 3,
            timeout_seconds: 10,
            popular_word_count: 20,
            parallelism: Some(4),
            ignored_urls: vec![],
            ignored_words: vec![],
        },
        user_agent: UserAgentConfig {
            crawler_name: "wordsweep-test".to_string(),
            crawler_version: "0.1".to_string(),
        },
        output: OutputConfig {
            result_path: String::new(),
            profile_output_path: String::new(),
        },
    }
}

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body.to_string().into_bytes(), "text/html"),
        )
        .mount(server)
        .await;
}

/// Mounts an HTML page with an exact expected request count
async fn mount_page_expect(server: &MockServer, at: &str, body: &str, expected: u64) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(body.to_string().into_bytes(), "text/html"),
        )
        .expect(expected)
        .mount(server)
        .await;
}

fn counts(result: &CrawlResult) -> HashMap<String, u64> {
    result.word_counts.iter().cloned().collect()
}

#[tokio::test]
async fn test_crawl_counts_words_across_pages() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        apple banana
        <a href="/page1">more</a>
        <a href="/page2">more</a>
        </body></html>"#,
    )
    .await;
    mount_page(&server, "/page1", r#"<html><body>apple cherry</body></html>"#).await;
    mount_page(&server, "/page2", r#"<html><body>banana apple</body></html>"#).await;

    let config = test_config(vec![format!("{}/", server.uri())]);
    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.urls_visited, 3);

    // Totals: apple 3, banana 2, more 2 (anchor text), cherry 1.
    // Rank order: banana beats more on length at equal count.
    assert_eq!(
        result.word_counts,
        vec![
            ("apple".to_string(), 3),
            ("banana".to_string(), 2),
            ("more".to_string(), 2),
            ("cherry".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn test_popular_word_count_limits_result() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>cat cat cat dog dog bird</body></html>"#,
    )
    .await;

    let mut config = test_config(vec![format!("{}/", server.uri())]);
    config.crawler.popular_word_count = 2;

    let result = crawl(&config).await.expect("crawl failed");
    assert_eq!(
        result.word_counts,
        vec![("cat".to_string(), 3), ("dog".to_string(), 2)]
    );
}

#[tokio::test]
async fn test_link_cycle_is_visited_once() {
    let server = MockServer::start().await;

    mount_page_expect(
        &server,
        "/",
        r#"<html><body>ping <a href="/loop">next</a></body></html>"#,
        1,
    )
    .await;
    mount_page_expect(
        &server,
        "/loop",
        r#"<html><body>pong <a href="/">back</a></body></html>"#,
        1,
    )
    .await;

    let mut config = test_config(vec![format!("{}/", server.uri())]);
    config.crawler.max_depth = 5;

    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.urls_visited, 2);
    let words = counts(&result);
    assert_eq!(words.get("ping"), Some(&1));
    assert_eq!(words.get("pong"), Some(&1));
}

#[tokio::test]
async fn test_depth_limit_prunes_deep_pages() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>root <a href="/level1">down</a></body></html>"#,
    )
    .await;
    mount_page(
        &server,
        "/level1",
        r#"<html><body>middle <a href="/level2">down</a></body></html>"#,
    )
    .await;
    // Two levels of recursion end above this page
    mount_page_expect(&server, "/level2", r#"<html><body>deep</body></html>"#, 0).await;

    let mut config = test_config(vec![format!("{}/", server.uri())]);
    config.crawler.max_depth = 2;

    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.urls_visited, 2);
    assert_eq!(counts(&result).get("deep"), None);
}

#[tokio::test]
async fn test_depth_zero_visits_roots_only() {
    let server = MockServer::start().await;

    mount_page_expect(
        &server,
        "/",
        r#"<html><body>root <a href="/child">down</a></body></html>"#,
        1,
    )
    .await;
    mount_page_expect(&server, "/child", r#"<html><body>child</body></html>"#, 0).await;

    let mut config = test_config(vec![format!("{}/", server.uri())]);
    config.crawler.max_depth = 0;

    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.urls_visited, 1);
    assert_eq!(counts(&result).get("root"), Some(&1));
    assert_eq!(counts(&result).get("child"), None);
}

#[tokio::test]
async fn test_ignored_urls_are_never_fetched() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>open <a href="/private/secrets">hidden</a></body></html>"#,
    )
    .await;
    mount_page_expect(
        &server,
        "/private/secrets",
        r#"<html><body>secret</body></html>"#,
        0,
    )
    .await;

    let mut config = test_config(vec![format!("{}/", server.uri())]);
    config.crawler.ignored_urls = vec![".*/private/.*".to_string()];

    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.urls_visited, 1);
    assert_eq!(counts(&result).get("secret"), None);
}

#[tokio::test]
async fn test_ignored_words_are_not_counted() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>a an the elephant elephant</body></html>"#,
    )
    .await;

    let mut config = test_config(vec![format!("{}/", server.uri())]);
    config.crawler.ignored_words = vec!["^.{1,3}$".to_string()];

    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.word_counts, vec![("elephant".to_string(), 2)]);
}

#[tokio::test]
async fn test_expired_deadline_fetches_nothing() {
    let server = MockServer::start().await;

    mount_page_expect(&server, "/", r#"<html><body>never</body></html>"#, 0).await;

    let mut config = test_config(vec![format!("{}/", server.uri())]);
    config.crawler.timeout_seconds = 0;

    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.urls_visited, 0);
    assert!(result.word_counts.is_empty());
}

#[tokio::test]
async fn test_empty_start_pages_yield_empty_result() {
    let config = test_config(vec![]);
    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.urls_visited, 0);
    assert!(result.word_counts.is_empty());
}

#[tokio::test]
async fn test_failed_page_is_branch_local() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>seed <a href="/bad">left</a> <a href="/good">right</a></body></html>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/bad"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/good", r#"<html><body>survivor</body></html>"#).await;

    let config = test_config(vec![format!("{}/", server.uri())]);
    let result = crawl(&config).await.expect("crawl failed");

    // The failing page keeps its claim but contributes nothing
    assert_eq!(result.urls_visited, 3);
    let words = counts(&result);
    assert_eq!(words.get("seed"), Some(&1));
    assert_eq!(words.get("survivor"), Some(&1));
}

#[tokio::test]
async fn test_non_html_page_contributes_nothing() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>page <a href="/report.pdf">file</a></body></html>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/report.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("pdfjunk pdfjunk")
                .insert_header("content-type", "application/pdf"),
        )
        .mount(&server)
        .await;

    let config = test_config(vec![format!("{}/", server.uri())]);
    let result = crawl(&config).await.expect("crawl failed");

    assert_eq!(result.urls_visited, 2);
    assert_eq!(counts(&result).get("pdfjunk"), None);
}

#[tokio::test]
async fn test_result_file_preserves_rank_order() {
    let server = MockServer::start().await;

    mount_page(&server, "/", r#"<html><body>cat cat dog</body></html>"#).await;

    let config = test_config(vec![format!("{}/", server.uri())]);
    let result = crawl(&config).await.expect("crawl failed");

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("results.json");
    write_result(&result, &out_path).expect("write failed");

    let content = std::fs::read_to_string(&out_path).unwrap();
    assert!(content.contains(r#""wordCounts":{"cat":2,"dog":1}"#));
    assert!(content.contains(r#""urlsVisited":1"#));
}
