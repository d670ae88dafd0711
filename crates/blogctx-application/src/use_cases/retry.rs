//! Bounded exponential-backoff retry

use std::future::Future;
use std::time::Duration;

use blogctx_domain::constants::{
    EMBEDDING_MAX_RETRIES, GENERATION_MAX_RETRIES, RETRY_BASE_DELAY_SECS,
};
use blogctx_domain::error::Result;
use blogctx_domain::ports::Delay;

/// Retry ceiling and backoff base
///
/// The wait before retry `k` (0-indexed) is `base_delay * 2^k`, so an
/// operation runs at most `max_retries + 1` times.
///
/// ```rust
/// use std::time::Duration;
/// use blogctx_application::RetryPolicy;
///
/// let policy = RetryPolicy::embedding();
/// assert_eq!(policy.max_attempts(), 4);
/// assert_eq!(policy.delay_for(2), Duration::from_secs(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt
    pub max_retries: u32,
    /// Wait before the first retry
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Policy for embedding requests (1s, 2s, 4s)
    pub fn embedding() -> Self {
        Self::new(
            EMBEDDING_MAX_RETRIES,
            Duration::from_secs(RETRY_BASE_DELAY_SECS),
        )
    }

    /// Policy for generation requests (1s, 2s, 4s, 8s, 16s)
    pub fn generation() -> Self {
        Self::new(
            GENERATION_MAX_RETRIES,
            Duration::from_secs(RETRY_BASE_DELAY_SECS),
        )
    }

    /// Same backoff with a different ceiling
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Total number of attempts
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Wait before retry `retry` (0-indexed)
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(retry))
    }

    /// Run `operation` until it succeeds or the retries are spent
    ///
    /// Returns the last error once every attempt failed.
    pub async fn run<T, F, Fut>(&self, delay: &dyn Delay, operation_name: &str, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut retry = 0;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if retry < self.max_retries => {
                    let wait = self.delay_for(retry);
                    tracing::debug!(
                        operation = operation_name,
                        attempt = retry + 1,
                        delay_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                        error = %e,
                        "Attempt failed, retrying"
                    );
                    delay.wait(wait).await;
                    retry += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
