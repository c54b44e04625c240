//! Error type definitions for the fact cache service

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// HTTP client construction and transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Terminal outcome of a failed upstream fetch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Upstream answered with a status >= 300
    #[error("Upstream returned HTTP status {status}")]
    Status { status: u16 },

    /// Upstream did not answer within the request timeout
    #[error("Upstream request timed out: {url}")]
    Timeout { url: String },

    /// Transport failures, unreadable or unparseable bodies
    #[error("Upstream request failed: {message}")]
    Other { message: String },
}

impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl SourceError {
    /// Classify a reqwest failure, keeping timeouts distinguishable
    pub fn from_reqwest(error: &reqwest::Error, url: &str) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Other {
                message: error.to_string(),
            }
        }
    }

    /// Whether another attempt may succeed (server-side errors only)
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Status { status } if *status >= 500)
    }
}
