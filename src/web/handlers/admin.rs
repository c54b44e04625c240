use axum::{Json, extract::State};

use crate::models::StatisticsResponse;
use crate::web::{
    AppState,
    extractors::RequestContext,
    utils::{log_request, shortened_url},
};

/// Dump access counters for every fingerprint ever cached
#[utoipa::path(
    get,
    path = "/admin/statistics",
    tag = "admin",
    summary = "Access statistics",
    description = "Access counts per shortened URL, including facts already evicted from the cache",
    responses(
        (status = 200, description = "Access statistics", body = Vec<StatisticsResponse>),
    )
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    context: RequestContext,
) -> Json<Vec<StatisticsResponse>> {
    log_request("get_statistics", &context);

    let base_url = &state.config.web.base_url;
    let statistics = state
        .facts_service
        .list_statistics()
        .into_iter()
        .map(|stats| StatisticsResponse {
            shortened_url: shortened_url(base_url, &stats.fingerprint),
            access_count: stats.access_count,
        })
        .collect();

    Json(statistics)
}
