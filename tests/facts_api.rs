//! HTTP API tests against the full router with a scripted upstream.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use fact_cache::{
    config::Config,
    errors::{SourceError, SourceResult},
    models::{FactResponse, NewFactResponse, StatisticsResponse},
    services::{FactStore, FactsService, StatisticsStore},
    sources::{FactSource, ParsedFact},
    web::{AppState, create_router},
};

const BASE_URL: &str = "http://localhost:8080";

/// Upstream double answering from a queue of scripted outcomes
#[derive(Default)]
struct ScriptedSource {
    outcomes: Mutex<VecDeque<SourceResult<ParsedFact>>>,
}

impl ScriptedSource {
    fn push_fact(&self, text: &str, key: &str) {
        self.push(Ok(ParsedFact {
            text: text.to_string(),
            permalink: format!("https://example.com/facts/{key}"),
            shortened: Some(key.to_string()),
        }));
    }

    fn push(&self, outcome: SourceResult<ParsedFact>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }
}

#[async_trait]
impl FactSource for ScriptedSource {
    async fn fetch_one(&self) -> SourceResult<ParsedFact> {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SourceError::Other {
                message: "script exhausted".to_string(),
            }))
    }
}

fn test_server(capacity: usize) -> (TestServer, Arc<ScriptedSource>) {
    let source = Arc::new(ScriptedSource::default());
    let service = FactsService::new(
        source.clone(),
        FactStore::new(NonZeroUsize::new(capacity).unwrap()),
        StatisticsStore::new(),
    );

    let mut config = Config::default();
    config.web.base_url = BASE_URL.to_string();
    let app = create_router(AppState::new(config, Arc::new(service)));

    (TestServer::new(app).unwrap(), source)
}

async fn statistics(server: &TestServer) -> HashMap<String, u64> {
    server
        .get("/admin/statistics")
        .await
        .json::<Vec<StatisticsResponse>>()
        .into_iter()
        .map(|entry| (entry.shortened_url, entry.access_count))
        .collect()
}

#[tokio::test]
async fn test_post_facts_returns_shortened_url() {
    let (server, source) = test_server(100);
    source.push_fact("This is a test fact", "test-fact");

    let response = server.post("/facts").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(
        body,
        json!({
            "original_fact": "This is a test fact",
            "shortened_url": "http://localhost:8080/facts/test-fact",
        })
    );
}

#[tokio::test]
async fn test_post_facts_upstream_failure_is_500() {
    let (server, source) = test_server(100);
    source.push(Err(SourceError::Status { status: 503 }));

    let response = server.post("/facts").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Failed to fetch fact");
    assert!(server.get("/facts").await.json::<Vec<Value>>().is_empty());
    assert!(statistics(&server).await.is_empty());
}

#[tokio::test]
async fn test_post_facts_timeout_is_500() {
    let (server, source) = test_server(100);
    source.push(Err(SourceError::Timeout {
        url: "https://example.com".to_string(),
    }));

    let response = server.post("/facts").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Failed to fetch fact");
}

#[tokio::test]
async fn test_list_facts_paginates_in_insertion_order() {
    let (server, source) = test_server(100);
    for i in 1..=3 {
        source.push_fact(&format!("Fact {i}"), &format!("f{i}"));
        server.post("/facts").await;
    }

    let texts = |facts: Vec<FactResponse>| facts.into_iter().map(|f| f.fact).collect::<Vec<_>>();

    let all = server.get("/facts").await.json::<Vec<FactResponse>>();
    assert_eq!(texts(all), vec!["Fact 1", "Fact 2", "Fact 3"]);

    let first_page = server
        .get("/facts")
        .add_query_param("limit", 2)
        .add_query_param("offset", 0)
        .await
        .json::<Vec<FactResponse>>();
    assert_eq!(texts(first_page), vec!["Fact 1", "Fact 2"]);

    let second_page = server
        .get("/facts")
        .add_query_param("limit", 2)
        .add_query_param("offset", 2)
        .await
        .json::<Vec<FactResponse>>();
    assert_eq!(texts(second_page), vec!["Fact 3"]);
}

#[tokio::test]
async fn test_list_facts_edge_parameters() {
    let (server, source) = test_server(100);
    source.push_fact("Only fact", "only");
    server.post("/facts").await;

    let past_end = server.get("/facts").add_query_param("offset", 5).await;
    assert_eq!(past_end.status_code(), StatusCode::OK);
    assert!(past_end.json::<Vec<Value>>().is_empty());

    let negative = server.get("/facts").add_query_param("offset", -1).await;
    assert!(negative.json::<Vec<Value>>().is_empty());

    let zero_limit = server.get("/facts").add_query_param("limit", 0).await;
    assert_eq!(zero_limit.json::<Vec<Value>>().len(), 1);

    let invalid = server.get("/facts").add_query_param("limit", "abc").await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(invalid.text(), "Invalid pagination parameters");
}

#[tokio::test]
async fn test_get_fact_counts_accesses() {
    let (server, source) = test_server(100);
    source.push_fact("Test fact", "test-fact");
    server.post("/facts").await;

    assert_eq!(
        statistics(&server).await["http://localhost:8080/facts/test-fact"],
        0
    );

    for _ in 0..2 {
        let response = server.get("/facts/test-fact").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({
                "fact": "Test fact",
                "original_permalink": "https://example.com/facts/test-fact",
            })
        );
    }

    assert_eq!(
        statistics(&server).await["http://localhost:8080/facts/test-fact"],
        2
    );
}

#[tokio::test]
async fn test_get_unknown_fact_is_404() {
    let (server, _source) = test_server(100);

    let response = server.get("/facts/non-existent-fact").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Fact not found");
    assert!(statistics(&server).await.is_empty());
}

#[tokio::test]
async fn test_redirect_to_permalink() {
    let (server, source) = test_server(100);
    source.push_fact("Test fact", "test-fact");
    server.post("/facts").await;

    let response = server.get("/facts/test-fact/redirect").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/facts/test-fact"
    );
    assert_eq!(
        statistics(&server).await["http://localhost:8080/facts/test-fact"],
        1
    );
}

#[tokio::test]
async fn test_redirect_unknown_fact_is_404_without_location() {
    let (server, _source) = test_server(100);

    let response = server.get("/facts/non-existent-fact/redirect").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Fact not found");
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_statistics_survive_eviction() {
    let (server, source) = test_server(2);
    for key in ["a", "b", "c"] {
        source.push_fact(&format!("Fact {key}"), key);
        server.post("/facts").await;
    }

    assert_eq!(server.get("/facts").await.json::<Vec<Value>>().len(), 2);
    assert_eq!(
        server.get("/facts/a").await.status_code(),
        StatusCode::NOT_FOUND
    );

    let stats = statistics(&server).await;
    assert_eq!(stats.len(), 3);
    assert!(stats.contains_key("http://localhost:8080/facts/a"));
}

#[tokio::test]
async fn test_duplicate_fact_keeps_counter() {
    let (server, source) = test_server(100);
    source.push_fact("Same fact", "same");
    server.post("/facts").await;
    server.get("/facts/same").await;

    source.push_fact("Same fact", "same");
    let response = server.post("/facts").await;
    assert_eq!(
        response.json::<NewFactResponse>().shortened_url,
        "http://localhost:8080/facts/same"
    );

    assert_eq!(server.get("/facts").await.json::<Vec<Value>>().len(), 1);
    assert_eq!(statistics(&server).await["http://localhost:8080/facts/same"], 1);
}

#[tokio::test]
async fn test_health_reports_store_sizes() {
    let (server, source) = test_server(1);
    source.push_fact("A", "a");
    server.post("/facts").await;
    source.push_fact("B", "b");
    server.post("/facts").await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cached_facts"], 1);
    assert_eq!(body["tracked_fingerprints"], 2);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (server, _source) = test_server(1);

    let response = server.get("/api/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.json::<Value>()["paths"]["/facts/{fingerprint}/redirect"].is_object());
}
