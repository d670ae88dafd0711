use async_trait::async_trait;

use crate::entities::SourcePost;
use crate::error::Result;

/// Blog CMS listing interface
///
/// # Example
///
/// ```ignore
/// let posts = source.fetch_posts(20).await?;
/// for post in &posts {
///     println!("{} {}", post.id, post.link);
/// }
/// ```
#[async_trait]
pub trait BlogSource: Send + Sync {
    /// Fetch up to `limit` posts, newest first as the CMS orders them
    async fn fetch_posts(&self, limit: usize) -> Result<Vec<SourcePost>>;

    /// Identifier of this implementation
    fn source_name(&self) -> &str;
}
