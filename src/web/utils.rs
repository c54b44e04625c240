//! Web utility functions

use tracing::debug;

use super::extractors::RequestContext;

/// Public link for a cached fact: `{base_url}/facts/{fingerprint}`
pub fn shortened_url(base_url: &str, fingerprint: &str) -> String {
    format!("{}/facts/{}", base_url.trim_end_matches('/'), fingerprint)
}

/// Log which operation a request resolved to
pub fn log_request(operation: &str, context: &RequestContext) {
    debug!(
        operation = operation,
        request_id = %context.request_id,
        user_agent = ?context.user_agent,
        real_ip = ?context.real_ip,
        "Handling request"
    );
}
