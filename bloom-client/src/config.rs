//! Client configuration

use std::time::Duration;

use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use crate::retry::RetryPolicy;

/// Client configuration for connecting to the CRM backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | BLOOM_API_URL | http://localhost:8000 | Backend base URL |
/// | BLOOM_API_TOKEN | - | Bearer token, supplied externally |
/// | BLOOM_TIMEOUT_SECS | 30 | Per-request timeout |
/// | BLOOM_RETRIES | 3 | Attempts per idempotent request |
/// | BLOOM_RETRY_DELAY_MS | 500 | Base backoff delay |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,

    /// Retry behaviour for failed requests
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("BLOOM_API_URL").unwrap_or(defaults.base_url);
        let timeout = std::env::var("BLOOM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        let attempts = std::env::var("BLOOM_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retry.max_attempts);
        let base_delay = std::env::var("BLOOM_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.retry.base_delay);

        Self {
            base_url,
            token: std::env::var("BLOOM_API_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout,
            retry: RetryPolicy {
                max_attempts: attempts,
                base_delay,
                ..defaults.retry
            },
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of attempts per idempotent request
    pub fn with_retries(mut self, attempts: u32) -> Self {
        self.retry.max_attempts = attempts;
        self
    }

    /// Set the base backoff delay
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry.base_delay = delay;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
