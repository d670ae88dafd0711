//! Knowledge Store Interface

use async_trait::async_trait;

use crate::entities::{Post, PostPatch};
use crate::error::Result;

/// Repository: Cached Post Records
///
/// A document collection keyed by post id. [`KnowledgeStore::scan`] returns
/// records in a stable store order (ascending key for the bundled
/// implementations); the retriever's keyword and fallback tiers depend on it.
///
/// # Example
///
/// ```ignore
/// use blogctx_domain::repositories::KnowledgeStore;
///
/// if store.get("42").await?.is_none() {
///     store.upsert("42", patch).await?;
/// }
/// let all = store.scan().await?;
/// ```
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Record by key, `None` when absent
    async fn get(&self, id: &str) -> Result<Option<Post>>;

    /// Create the record or merge `patch` into the existing one
    ///
    /// Returns the stored record after the merge.
    async fn upsert(&self, id: &str, patch: PostPatch) -> Result<Post>;

    /// Every record, in store order
    async fn scan(&self) -> Result<Vec<Post>>;

    /// Identifier of this implementation
    fn store_name(&self) -> &str;
}
