//! Centralized error handling for the fact cache service
//!
//! # Error Categories
//!
//! - **Source Errors**: upstream fact API failures (status, timeout, transport, parse).
//!   These never escape the fetch orchestrator; they degrade to "no fact".
//! - **Configuration Errors**: invalid settings detected at startup
//! - **Validation Errors**: malformed request parameters at the HTTP boundary
//!
//! # Usage
//!
//! ```rust
//! use fact_cache::errors::{AppError, AppResult};
//!
//! fn check_capacity(cache_size: usize) -> AppResult<()> {
//!     if cache_size == 0 {
//!         return Err(AppError::configuration("cache_size must be greater than zero"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_capacity(0).is_err());
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for upstream source Results
pub type SourceResult<T> = Result<T, SourceError>;
