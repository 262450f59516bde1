//! Compiled ignore-pattern sets

use crate::ConfigError;
use regex::Regex;

/// A set of compiled regular expressions with full-string match semantics
///
/// Used for both ignored-URL and ignored-word rules. A candidate matches the
/// set only when some pattern matches the *entire* candidate, so a pattern
/// like `https://example\.com/private` excludes exactly that URL, not every
/// URL containing it as a substring.
#[derive(Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    /// Compiles a list of pattern strings into a set
    ///
    /// Each pattern is anchored at both ends before compilation. A malformed
    /// pattern is a fatal configuration error: it is reported here, before
    /// any traversal begins, never mid-crawl.
    pub fn compile(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let anchored = format!("^(?:{})$", pattern);
            let regex = Regex::new(&anchored).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
            compiled.push(regex);
        }

        Ok(Self { patterns: compiled })
    }

    /// Returns true if `candidate` fully matches any pattern in the set
    pub fn matches(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(candidate))
    }

    /// Returns true if the set contains no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
