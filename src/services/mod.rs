//! Service layer
//!
//! - [`FactStore`]: bounded, insertion-ordered fact cache
//! - [`StatisticsStore`]: unbounded per-fingerprint access counters
//! - [`FactsService`]: fetch orchestration and the operations exposed to the web layer

pub mod fact_store;
pub mod facts_service;
pub mod statistics_store;

pub use fact_store::FactStore;
pub use facts_service::FactsService;
pub use statistics_store::StatisticsStore;
