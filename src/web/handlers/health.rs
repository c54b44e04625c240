//! Health check handler

use axum::{Json, extract::State};
use chrono::Utc;

use crate::web::{
    AppState, extractors::RequestContext, responses::HealthResponse, utils::log_request,
};

/// Health check endpoint
///
/// Reports uptime and the current size of both stores.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
    context: RequestContext,
) -> Json<HealthResponse> {
    log_request("health_check", &context);

    let now = Utc::now();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (now - state.start_time).num_seconds(),
        cached_facts: state.facts_service.cached_fact_count().await,
        tracked_fingerprints: state.facts_service.tracked_fingerprint_count(),
        timestamp: now,
    })
}
