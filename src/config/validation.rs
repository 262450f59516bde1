use crate::config::types::{Config, CrawlerConfig, UserAgentConfig};
use crate::url::PatternSet;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth and popular_word_count are unsigned, so the >= 0 bounds hold
    // by construction. timeout-seconds = 0 is legal: it means the deadline
    // has already passed and the crawl returns an empty result.

    if let Some(parallelism) = config.parallelism {
        if parallelism < 1 {
            return Err(ConfigError::Validation(format!(
                "parallelism must be >= 1, got {}",
                parallelism
            )));
        }
    }

    for page in &config.start_pages {
        validate_start_page(page)?;
    }

    // Compile both pattern sets now so a malformed pattern is rejected
    // before any traversal begins
    PatternSet::compile(&config.ignored_urls)?;
    PatternSet::compile(&config.ignored_words)?;

    Ok(())
}

/// Validates a start page URL
fn validate_start_page(page: &str) -> Result<(), ConfigError> {
    let url = Url::parse(page)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid start page '{}': {}", page, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Start page '{}' must use an http or https scheme",
            page
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}
