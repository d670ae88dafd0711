//! Null embedding provider for offline use
//!
//! Deterministic vectors built from character hashes, so texts that share
//! characters score as similar. No network access.

use std::sync::Arc;

use async_trait::async_trait;
use blogctx_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use blogctx_domain::error::Result;
use blogctx_domain::ports::EmbeddingProvider;
use blogctx_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_NULL, NULL_EMBEDDING_MODEL};

/// Null embedding provider
///
/// # Example
///
/// ```rust
/// use blogctx_providers::embedding::NullEmbeddingProvider;
/// use blogctx_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Default)]
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    pub fn new() -> Self {
        Self
    }

    fn vectorize(text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; EMBEDDING_DIMENSION_NULL];
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            let bucket = (u32::from(c) as usize).wrapping_mul(31) % EMBEDDING_DIMENSION_NULL;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(Self::vectorize(text), NULL_EMBEDDING_MODEL))
            .collect())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Offline character-hash embeddings for development",
    factory: |_config: &EmbeddingProviderConfig| Ok(Arc::new(NullEmbeddingProvider::new())),
};
