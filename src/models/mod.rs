use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::fingerprint;

/// A fact as returned by the upstream API, keyed by the fingerprint of its text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Fact {
    pub text: String,
    pub permalink: String,
    /// Adler-32 of `text` in hex; the cache and statistics key
    #[schema(example = "11e60398")]
    pub fingerprint: String,
}

impl Fact {
    pub fn new(text: impl Into<String>, permalink: impl Into<String>) -> Self {
        let text = text.into();
        let fingerprint = fingerprint(&text);
        Self {
            text,
            permalink: permalink.into(),
            fingerprint,
        }
    }

    /// Build a fact with a caller-chosen fingerprint instead of the derived one.
    ///
    /// Only meant for test doubles that need predictable keys.
    pub fn with_fingerprint(
        text: impl Into<String>,
        permalink: impl Into<String>,
        fingerprint: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            permalink: permalink.into(),
            fingerprint: fingerprint.into(),
        }
    }
}

/// Access counter snapshot for one fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub fingerprint: String,
    pub access_count: u64,
}

/// Body returned when a new fact is fetched
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewFactResponse {
    pub original_fact: String,
    #[schema(example = "http://localhost:8080/facts/11e60398")]
    pub shortened_url: String,
}

/// Body returned for a cached fact
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FactResponse {
    pub fact: String,
    pub original_permalink: String,
}

impl From<Fact> for FactResponse {
    fn from(fact: Fact) -> Self {
        Self {
            fact: fact.text,
            original_permalink: fact.permalink,
        }
    }
}

/// Access statistics entry in the admin dump
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatisticsResponse {
    pub shortened_url: String,
    pub access_count: u64,
}
