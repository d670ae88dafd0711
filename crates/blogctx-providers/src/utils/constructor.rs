//! Constructor helpers shared by the HTTP adapters

use std::time::Duration;

use reqwest::Client;

use crate::constants::DEFAULT_HTTP_TIMEOUT_SECS;

/// Trimmed API key; `None` and blank keys both become empty
pub fn normalize_api_key(api_key: Option<&str>) -> String {
    api_key.map(str::trim).unwrap_or_default().to_string()
}

/// Base URL without surrounding whitespace or trailing slashes
pub fn effective_url(provided_url: Option<&str>, default_url: &str) -> String {
    provided_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(default_url)
        .trim_end_matches('/')
        .to_string()
}

/// Timeout from seconds, falling back to the default
pub fn timeout_or_default(timeout_secs: Option<u64>) -> Duration {
    Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
}

/// Reqwest client with a request timeout
pub fn http_client(timeout: Duration) -> Result<Client, String> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))
}
