//! Embedding Client
//!
//! Wraps an [`EmbeddingProvider`] with the retry policy and degrades every
//! failure to `None`, so callers fall back instead of aborting.

use std::sync::Arc;

use blogctx_domain::ports::{Delay, EmbeddingProvider};
use blogctx_domain::value_objects::Embedding;
use tracing::{error, warn};

use super::retry::RetryPolicy;

/// Retrying, never-failing front for an embedding provider
pub struct EmbeddingClient {
    provider: Arc<dyn EmbeddingProvider>,
    delay: Arc<dyn Delay>,
    policy: RetryPolicy,
}

impl EmbeddingClient {
    /// Create a client with the default embedding retry policy
    pub fn new(provider: Arc<dyn EmbeddingProvider>, delay: Arc<dyn Delay>) -> Self {
        Self {
            provider,
            delay,
            policy: RetryPolicy::embedding(),
        }
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Embedding for `text`, or `None` when it could not be obtained
    ///
    /// A provider without credentials is never called.
    pub async fn embed(&self, text: &str) -> Option<Embedding> {
        if !self.provider.is_configured() {
            warn!(
                provider = self.provider.provider_name(),
                "Embedding provider has no API key, skipping embedding"
            );
            return None;
        }

        let result = self
            .policy
            .run(self.delay.as_ref(), "embed", || self.provider.embed(text))
            .await;

        match result {
            Ok(embedding) => Some(embedding),
            Err(e) => {
                error!(
                    provider = self.provider.provider_name(),
                    attempts = self.policy.max_attempts(),
                    error = %e,
                    "Embedding failed after retries"
                );
                None
            }
        }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }
}
