//! Configuration default values
//!
//! All default values for configuration options live here so they can be
//! changed in one place.

// Web server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

// Fact cache defaults
pub const DEFAULT_CACHE_SIZE: usize = 100;
pub const DEFAULT_REMOTE_URL: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random";

// Upstream transport defaults
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAX_RETRIES: u32 = 5;
pub const DEFAULT_RETRY_INITIAL_DELAY_MS: u64 = 100;
pub const DEFAULT_RETRY_MAX_DELAY_SECS: u64 = 5;

// Environment
pub const ENV_PREFIX: &str = "FACT_CACHE_";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";
