//! Random fact proxy with a bounded fingerprint cache and access statistics.
//!
//! Facts are fetched from an upstream API, keyed by an Adler-32 fingerprint
//! of their text, and held in a fixed-capacity FIFO cache. Access counters
//! outlive cache eviction.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod sources;
pub mod utils;
pub mod web;
