//! Utility modules
//!
//! - `fingerprint`: content fingerprints used as cache keys
//! - `pagination`: offset/limit slicing of ordered snapshots
//! - `retry`: exponential backoff for upstream calls

pub mod fingerprint;
pub mod pagination;
pub mod retry;

pub use fingerprint::fingerprint;
pub use pagination::{DEFAULT_PAGE_LIMIT, slice};
pub use retry::{RetryConfig, with_retry};
