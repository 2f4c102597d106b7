//! Retry policy with exponential backoff

use std::time::Duration;

use reqwest::Method;

/// How failed requests are retried
///
/// `max_attempts` counts the first try, so `3` means one request plus up to
/// two retries. The delay before retry `n` (1-based) is
/// `base_delay * 2^(n-1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    /// Also retry POST / PATCH
    pub retry_non_idempotent: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            retry_non_idempotent: false,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no backoff
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Attempts allowed for a request with this method
    pub fn attempts_for(&self, method: &Method) -> u32 {
        let idempotent = matches!(
            *method,
            Method::GET | Method::HEAD | Method::PUT | Method::DELETE | Method::OPTIONS
        );
        if idempotent || self.retry_non_idempotent {
            self.max_attempts.max(1)
        } else {
            1
        }
    }

    /// Delay to wait after failed attempt `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1 << exponent)
    }
}
