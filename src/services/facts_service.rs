//! Fetch orchestration between the upstream source and the in-memory stores
//!
//! `FactsService` is the only entry point the web layer uses. It owns the
//! bounded [`FactStore`] and the unbounded [`StatisticsStore`], and it talks
//! to upstream through the [`FactSource`] seam so tests can swap the network
//! out entirely.
//!
//! Upstream failures are logged and reported as `None`; they never surface as
//! errors and never touch either store.

use std::sync::Arc;
use tracing::{debug, error, warn};

use super::{FactStore, StatisticsStore};
use crate::config::FactsConfig;
use crate::errors::{AppResult, SourceError};
use crate::models::{Fact, Statistics};
use crate::sources::FactSource;
use crate::utils::slice;

pub struct FactsService {
    source: Arc<dyn FactSource>,
    facts: FactStore,
    statistics: StatisticsStore,
}

impl FactsService {
    pub fn new(source: Arc<dyn FactSource>, facts: FactStore, statistics: StatisticsStore) -> Self {
        Self {
            source,
            facts,
            statistics,
        }
    }

    /// Build the service with empty stores sized from configuration
    pub fn from_config(source: Arc<dyn FactSource>, config: &FactsConfig) -> AppResult<Self> {
        Ok(Self::new(
            source,
            FactStore::new(config.capacity()?),
            StatisticsStore::new(),
        ))
    }

    /// Fetch a fact from upstream and cache it on first sighting.
    ///
    /// The fetched fact is returned even when its fingerprint was already
    /// cached; only the stores ignore duplicates. `None` means upstream failed.
    pub async fn fetch_random_fact(&self) -> Option<Fact> {
        let fact: Fact = match self.source.fetch_one().await {
            Ok(parsed) => parsed.into(),
            Err(SourceError::Status { status }) => {
                warn!("Error fetching fact from upstream: HTTP status {}", status);
                return None;
            }
            Err(SourceError::Timeout { url }) => {
                error!("Timeout fetching fact from upstream {}", url);
                return None;
            }
            Err(err) => {
                error!("Failed to fetch fact: {}", err);
                return None;
            }
        };

        // Fact first, then its counter: a counter must never exist without its fact
        if self.facts.try_insert(fact.clone()).await {
            self.statistics.create_if_absent(&fact.fingerprint);
            debug!("Cached new fact {}", fact.fingerprint);
        } else {
            debug!("Fact {} already cached", fact.fingerprint);
        }

        Some(fact)
    }

    pub async fn get_fact(&self, fingerprint: &str) -> Option<Fact> {
        self.facts.get(fingerprint).await
    }

    /// Page of cached facts in insertion order
    pub async fn list_facts(&self, limit: i64, offset: i64) -> Vec<Fact> {
        slice(&self.facts.snapshot().await, limit, offset)
    }

    pub fn list_statistics(&self) -> Vec<Statistics> {
        self.statistics.snapshot()
    }

    /// Count one resolution of a cached fact. Unknown fingerprints are ignored.
    pub fn record_access(&self, fingerprint: &str) {
        if self.statistics.increment(fingerprint).is_none() {
            debug!("Ignoring access for unknown fingerprint {}", fingerprint);
        }
    }

    pub async fn cached_fact_count(&self) -> usize {
        self.facts.len().await
    }

    pub fn tracked_fingerprint_count(&self) -> usize {
        self.statistics.len()
    }
}
