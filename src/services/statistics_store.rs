//! Per-fingerprint access counters
//!
//! Entries are created once, on the first sighting of a fingerprint, and are
//! never removed, so counters outlive the eviction of their fact from the
//! bounded cache. Each counter is an `AtomicU64` inside a sharded map, so
//! increments for different keys do not contend on a single lock.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::Statistics;

#[derive(Debug, Default)]
pub struct StatisticsStore {
    counters: DashMap<String, AtomicU64>,
}

impl StatisticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a zeroed counter for `fingerprint` unless one already exists.
    ///
    /// Returns `true` if a counter was created. An existing counter is never reset.
    pub fn create_if_absent(&self, fingerprint: &str) -> bool {
        match self.counters.entry(fingerprint.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(AtomicU64::new(0));
                true
            }
        }
    }

    /// Bump the counter for `fingerprint`. Unknown fingerprints are ignored.
    ///
    /// Returns the new count, or `None` if the fingerprint was never observed.
    pub fn increment(&self, fingerprint: &str) -> Option<u64> {
        self.counters
            .get(fingerprint)
            .map(|counter| counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn get(&self, fingerprint: &str) -> Option<u64> {
        self.counters
            .get(fingerprint)
            .map(|counter| counter.load(Ordering::Relaxed))
    }

    /// Point-in-time copy of every counter, in no particular order
    pub fn snapshot(&self) -> Vec<Statistics> {
        self.counters
            .iter()
            .map(|entry| Statistics {
                fingerprint: entry.key().clone(),
                access_count: entry.value().load(Ordering::Relaxed),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
