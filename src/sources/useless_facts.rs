//! HTTP source for the useless facts API

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{FactSource, ParsedFact};
use crate::config::FactsConfig;
use crate::errors::{AppResult, SourceError, SourceResult};
use crate::utils::{RetryConfig, with_retry};

/// Fetches random facts over HTTP, retrying server errors with backoff
#[derive(Debug, Clone)]
pub struct UselessFactsSource {
    client: Client,
    remote_url: String,
    retry: RetryConfig,
}

impl UselessFactsSource {
    pub fn new(config: &FactsConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(concat!("fact-cache/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            remote_url: config.remote_url.clone(),
            retry: config.retry_config(),
        })
    }

    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    async fn fetch_attempt(&self) -> SourceResult<ParsedFact> {
        let response = self
            .client
            .get(&self.remote_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SourceError::from_reqwest(&e, &self.remote_url))?;

        let status = response.status();
        if status.as_u16() >= 300 {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let parsed = response
            .json::<ParsedFact>()
            .await
            .map_err(|e| SourceError::from_reqwest(&e, &self.remote_url))?;

        debug!("Fetched fact from {}", self.remote_url);
        Ok(parsed)
    }
}

#[async_trait]
impl FactSource for UselessFactsSource {
    async fn fetch_one(&self) -> SourceResult<ParsedFact> {
        with_retry(
            &self.retry,
            || self.fetch_attempt(),
            SourceError::is_retryable,
            "fetch random fact",
        )
        .await
    }
}
