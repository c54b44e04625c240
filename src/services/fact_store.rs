//! Bounded fact cache keyed by fingerprint
//!
//! Entries are evicted in insertion order once the capacity is reached.
//! Lookups and duplicate inserts never refresh an entry, so although the
//! backing structure is an `LruCache`, only `push` ever touches recency and
//! the effective policy is first-in-first-out.

use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::Fact;

pub struct FactStore {
    entries: RwLock<LruCache<String, Fact>>,
}

impl FactStore {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Insert `fact` unless its fingerprint is already cached.
    ///
    /// Returns `true` when an insertion happened. An existing entry is left
    /// untouched: no overwrite, no reordering.
    pub async fn try_insert(&self, fact: Fact) -> bool {
        let mut entries = self.entries.write().await;

        // `contains` does not promote the key
        if entries.contains(&fact.fingerprint) {
            return false;
        }

        let key = fact.fingerprint.clone();
        if let Some((evicted, _)) = entries.push(key, fact) {
            debug!("Evicted oldest cached fact {}", evicted);
        }

        true
    }

    pub async fn get(&self, fingerprint: &str) -> Option<Fact> {
        self.entries.read().await.peek(fingerprint).cloned()
    }

    /// Copy of all cached facts, oldest first
    pub async fn snapshot(&self) -> Vec<Fact> {
        self.entries
            .read()
            .await
            .iter()
            .rev()
            .map(|(_, fact)| fact.clone())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn capacity(&self) -> NonZeroUsize {
        self.entries.read().await.cap()
    }
}
