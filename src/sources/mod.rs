//! Upstream fact sources
//!
//! A source performs one logical "get one fact" call and reports exactly one
//! terminal outcome. Any retry policy lives inside the source; callers never
//! retry on their own.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::SourceResult;
use crate::models::Fact;

pub mod useless_facts;

pub use useless_facts::UselessFactsSource;

/// Fact body as parsed from the upstream response.
///
/// Only `text` and `permalink` are required; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsedFact {
    pub text: String,
    pub permalink: String,
    /// Pre-computed fingerprint, only ever supplied by test upstreams
    #[serde(default)]
    pub shortened: Option<String>,
}

impl ParsedFact {
    pub fn new(text: impl Into<String>, permalink: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            permalink: permalink.into(),
            shortened: None,
        }
    }
}

impl From<ParsedFact> for Fact {
    fn from(parsed: ParsedFact) -> Self {
        match parsed.shortened {
            Some(fingerprint) => Fact::with_fingerprint(parsed.text, parsed.permalink, fingerprint),
            None => Fact::new(parsed.text, parsed.permalink),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch one fact from upstream
    async fn fetch_one(&self) -> SourceResult<ParsedFact>;
}
