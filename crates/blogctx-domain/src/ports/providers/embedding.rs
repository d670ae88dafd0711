use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Turns text into a dense vector. Implementations perform a single attempt
/// per call; retry and degradation live in the application layer.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with one item, and
/// `is_configured()` returns `true`.
///
/// # Example
///
/// ```ignore
/// use blogctx_domain::ports::EmbeddingProvider;
///
/// let embedding = provider.embed("フリーランス 節税の話").await?;
/// println!("{} dims from {}", embedding.dimensions, provider.provider_name());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts (must be implemented by provider)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Identifier of this implementation (e.g. "gemini", "null")
    fn provider_name(&self) -> &str;

    /// Whether credentials are present; `false` means calls cannot succeed
    fn is_configured(&self) -> bool {
        true
    }
}
