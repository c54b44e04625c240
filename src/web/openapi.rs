//! OpenAPI documentation generated from the handler annotations

use utoipa::OpenApi;

use super::handlers;
use super::responses::HealthResponse;
use crate::models::{FactResponse, NewFactResponse, StatisticsResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fact Cache API",
        description = "Fetches random facts from upstream, caches them under short fingerprints and counts how often each one is resolved."
    ),
    paths(
        handlers::health::health_check,
        handlers::facts::create_fact,
        handlers::facts::list_facts,
        handlers::facts::get_fact,
        handlers::facts::redirect_to_permalink,
        handlers::admin::get_statistics,
    ),
    components(schemas(
        NewFactResponse,
        FactResponse,
        StatisticsResponse,
        HealthResponse,
    )),
    tags(
        (name = "facts", description = "Fetching and resolving cached facts"),
        (name = "admin", description = "Access statistics"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/health",
            "/facts",
            "/facts/{fingerprint}",
            "/facts/{fingerprint}/redirect",
            "/admin/statistics",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
