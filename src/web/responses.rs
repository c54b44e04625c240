//! HTTP response types and helpers
//!
//! Error bodies are short plain-text messages; successful bodies are JSON.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::errors::AppError;

pub const FAILED_TO_FETCH_FACT: &str = "Failed to fetch fact";
pub const FACT_NOT_FOUND: &str = "Fact not found";

/// Service health summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
    /// Facts currently held in the bounded cache
    pub cached_facts: usize,
    /// Fingerprints with access statistics, including evicted ones
    pub tracked_fingerprints: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Plain-text error response
pub fn text_error(status: StatusCode, message: &str) -> Response {
    (status, message.to_string()).into_response()
}

pub fn not_found(message: &str) -> Response {
    text_error(StatusCode::NOT_FOUND, message)
}

pub fn internal_error(message: &str) -> Response {
    text_error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Convert AppError to appropriate HTTP response
pub fn handle_error(error: AppError) -> impl IntoResponse {
    let (status, message) = match &error {
        AppError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),
        AppError::Source(_) | AppError::Http(_) => (
            StatusCode::BAD_GATEWAY,
            "External service communication failed".to_string(),
        ),
        AppError::Configuration { .. } | AppError::Internal { .. } => {
            error!("Internal error while handling request: {}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };

    (status, message)
}
