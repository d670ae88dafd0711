use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller before a retry
///
/// Retry loops take this as a dependency so tests can record the requested
/// delays instead of waiting on real timers.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Wait for `duration`
    async fn wait(&self, duration: Duration);
}
