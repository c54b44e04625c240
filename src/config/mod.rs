use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;
use tracing::info;
use url::Url;

pub mod defaults;
pub mod duration_serde;

use crate::errors::{AppError, AppResult};
use crate::utils::RetryConfig;
use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub facts: FactsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public base URL used to render shortened fact links
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Fact cache and upstream source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactsConfig {
    /// Maximum number of facts held in the cache
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
    /// Upstream endpoint returning one random fact per GET
    #[serde(default = "default_remote_url")]
    pub remote_url: String,
    #[serde(default = "default_connect_timeout", with = "duration_serde")]
    pub connect_timeout: Duration,
    /// Total time allowed for a single upstream request, body included
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,
    /// Retries after the first attempt when upstream answers 5xx
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_initial_delay", with = "duration_serde")]
    pub retry_initial_delay: Duration,
    #[serde(default = "default_retry_max_delay", with = "duration_serde")]
    pub retry_max_delay: Duration,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

fn default_remote_url() -> String {
    DEFAULT_REMOTE_URL.to_string()
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_retry_initial_delay() -> Duration {
    Duration::from_millis(DEFAULT_RETRY_INITIAL_DELAY_MS)
}

fn default_retry_max_delay() -> Duration {
    Duration::from_secs(DEFAULT_RETRY_MAX_DELAY_SECS)
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: default_base_url(),
        }
    }
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            cache_size: default_cache_size(),
            remote_url: default_remote_url(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            max_retries: default_max_retries(),
            retry_initial_delay: default_retry_initial_delay(),
            retry_max_delay: default_retry_max_delay(),
        }
    }
}

impl FactsConfig {
    /// Cache capacity, rejecting zero
    pub fn capacity(&self) -> AppResult<NonZeroUsize> {
        NonZeroUsize::new(self.cache_size)
            .ok_or_else(|| AppError::configuration("facts.cache_size must be greater than zero"))
    }

    /// Backoff policy for the upstream transport
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::with_retries(
            self.max_retries,
            self.retry_initial_delay,
            self.retry_max_delay,
        )
    }

    pub fn validate(&self) -> AppResult<()> {
        self.capacity()?;
        validate_http_url("facts.remote_url", &self.remote_url)?;

        if self.request_timeout.is_zero() {
            return Err(AppError::configuration(
                "facts.request_timeout must be greater than zero",
            ));
        }
        if self.retry_initial_delay > self.retry_max_delay {
            return Err(AppError::configuration(
                "facts.retry_initial_delay must not exceed facts.retry_max_delay",
            ));
        }

        Ok(())
    }
}

impl WebConfig {
    pub fn validate(&self) -> AppResult<()> {
        validate_http_url("web.base_url", &self.base_url)
    }
}

fn validate_http_url(field: &str, value: &str) -> AppResult<()> {
    let url = Url::parse(value)
        .map_err(|e| AppError::configuration(format!("{field} is not a valid URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::configuration(format!(
            "{field} must use http or https, got '{scheme}'"
        ))),
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from_file(&config_file)
    }

    /// Load configuration layered as defaults, then the TOML file, then
    /// `FACT_CACHE_*` environment variables (`__` separates nested keys).
    ///
    /// A missing file is created with the default settings.
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if !Path::new(config_file).exists() {
            let contents = toml::to_string_pretty(&Self::default())?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
        }

        let config: Config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.web.validate()?;
        self.facts.validate()
    }
}
