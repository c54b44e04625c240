//! Fact handlers
//!
//! Fetching new facts, listing the cache, and resolving shortened links.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use crate::models::{FactResponse, NewFactResponse};
use crate::web::{
    AppState,
    extractors::{PageParams, RequestContext},
    responses::{FACT_NOT_FOUND, FAILED_TO_FETCH_FACT, internal_error, not_found},
    utils::{log_request, shortened_url},
};

/// Fetch a random fact from upstream and cache it
#[utoipa::path(
    post,
    path = "/facts",
    tag = "facts",
    summary = "Fetch a new fact",
    description = "Fetch a random fact from upstream, cache it and return its shortened URL",
    responses(
        (status = 200, description = "Fact fetched", body = NewFactResponse),
        (status = 500, description = "Upstream fetch failed", body = String),
    )
)]
pub async fn create_fact(State(state): State<AppState>, context: RequestContext) -> Response {
    log_request("create_fact", &context);

    match state.facts_service.fetch_random_fact().await {
        Some(fact) => {
            let shortened_url = shortened_url(&state.config.web.base_url, &fact.fingerprint);
            info!("Fetched fact {}", fact.fingerprint);
            Json(NewFactResponse {
                original_fact: fact.text,
                shortened_url,
            })
            .into_response()
        }
        None => internal_error(FAILED_TO_FETCH_FACT),
    }
}

/// List cached facts in insertion order
#[utoipa::path(
    get,
    path = "/facts",
    tag = "facts",
    summary = "List cached facts",
    params(
        ("limit" = Option<i64>, Query, description = "Page size; non-positive values mean the default of 50"),
        ("offset" = Option<i64>, Query, description = "Number of facts to skip"),
    ),
    responses(
        (status = 200, description = "Page of cached facts", body = Vec<FactResponse>),
        (status = 400, description = "Non-integer pagination parameters", body = String),
    )
)]
pub async fn list_facts(
    State(state): State<AppState>,
    context: RequestContext,
    page: PageParams,
) -> Json<Vec<FactResponse>> {
    log_request("list_facts", &context);

    let facts = state
        .facts_service
        .list_facts(page.limit, page.offset)
        .await;
    debug!(
        "Listing {} facts (limit={}, offset={})",
        facts.len(),
        page.limit,
        page.offset
    );

    Json(facts.into_iter().map(FactResponse::from).collect())
}

/// Resolve a fingerprint to its cached fact
#[utoipa::path(
    get,
    path = "/facts/{fingerprint}",
    tag = "facts",
    summary = "Get a cached fact",
    params(("fingerprint" = String, Path, description = "Fact fingerprint")),
    responses(
        (status = 200, description = "Cached fact", body = FactResponse),
        (status = 404, description = "Fact not found", body = String),
    )
)]
pub async fn get_fact(
    State(state): State<AppState>,
    Path(fingerprint): Path<String>,
    context: RequestContext,
) -> Response {
    log_request("get_fact", &context);

    match state.facts_service.get_fact(&fingerprint).await {
        Some(fact) => {
            state.facts_service.record_access(&fingerprint);
            Json(FactResponse::from(fact)).into_response()
        }
        None => not_found(FACT_NOT_FOUND),
    }
}

/// Redirect a fingerprint to the fact's original permalink
#[utoipa::path(
    get,
    path = "/facts/{fingerprint}/redirect",
    tag = "facts",
    summary = "Redirect to the original permalink",
    params(("fingerprint" = String, Path, description = "Fact fingerprint")),
    responses(
        (status = 302, description = "Redirect to the original permalink"),
        (status = 404, description = "Fact not found", body = String),
    )
)]
pub async fn redirect_to_permalink(
    State(state): State<AppState>,
    Path(fingerprint): Path<String>,
    context: RequestContext,
) -> Response {
    log_request("redirect_to_permalink", &context);

    match state.facts_service.get_fact(&fingerprint).await {
        Some(fact) => {
            state.facts_service.record_access(&fingerprint);
            (StatusCode::FOUND, [(header::LOCATION, fact.permalink)]).into_response()
        }
        None => not_found(FACT_NOT_FOUND),
    }
}
