//! Post Sync Use Case
//!
//! Pulls the blog listing into the knowledge store. Each post is handled on
//! its own: the embedding is only requested when the cached record is
//! missing, has no embedding, or was built from different text.

use std::sync::Arc;

use async_trait::async_trait;
use blogctx_domain::constants::{BODY_MAX_CHARS, EXCERPT_MAX_CHARS, SYNC_DEFAULT_PAGE_SIZE};
use blogctx_domain::error::Result;
use blogctx_domain::ports::BlogSource;
use blogctx_domain::repositories::KnowledgeStore;
use blogctx_domain::utils::{content_hash, sanitize, strip_tags};
use blogctx_domain::{Post, PostPatch, SourcePost};
use tracing::{debug, info, warn};

use super::embedding_client::EmbeddingClient;
use crate::ports::services::{SyncReport, SyncServiceInterface};

/// What happened to one listed post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostOutcome {
    Embedded,
    Unembedded,
    Skipped,
}

/// Sanitized fields of a listed post
struct PreparedPost {
    title: String,
    excerpt: String,
    body: String,
    embed_text: String,
    hash: String,
}

impl PreparedPost {
    fn from_source(source: &SourcePost) -> Self {
        let title = strip_tags(&source.title.rendered);
        let excerpt = sanitize(&source.excerpt.rendered, EXCERPT_MAX_CHARS);
        let body = sanitize(&source.content.rendered, BODY_MAX_CHARS);
        let embed_text = format!("{title} {body}");
        let hash = content_hash(&embed_text);

        Self {
            title,
            excerpt,
            body,
            embed_text,
            hash,
        }
    }
}

/// Whether a cached record can keep its embedding
///
/// Records written before hashes were stored count as fresh.
fn is_fresh(post: &Post, hash: &str) -> bool {
    post.has_embedding() && post.content_hash.as_deref().is_none_or(|h| h == hash)
}

/// Sync service implementation
pub struct SyncServiceImpl {
    source: Arc<dyn BlogSource>,
    store: Arc<dyn KnowledgeStore>,
    embedder: Arc<EmbeddingClient>,
    page_size: usize,
}

impl SyncServiceImpl {
    /// Create new sync service with injected dependencies
    pub fn new(
        source: Arc<dyn BlogSource>,
        store: Arc<dyn KnowledgeStore>,
        embedder: Arc<EmbeddingClient>,
    ) -> Self {
        Self {
            source,
            store,
            embedder,
            page_size: SYNC_DEFAULT_PAGE_SIZE,
        }
    }

    /// Number of posts requested from the listing
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    async fn sync_post(&self, source: &SourcePost) -> Result<PostOutcome> {
        let prepared = PreparedPost::from_source(source);

        let cached = self.store.get(&source.id).await?;
        if cached.as_ref().is_some_and(|post| is_fresh(post, &prepared.hash)) {
            debug!(post_id = %source.id, "Cached embedding is fresh");
            return Ok(PostOutcome::Skipped);
        }

        let embedding = self.embedder.embed(&prepared.embed_text).await;
        let outcome = if embedding.is_some() {
            PostOutcome::Embedded
        } else {
            PostOutcome::Unembedded
        };

        // The hash is only recorded together with the embedding it describes.
        let (embedding, content_hash) = match embedding {
            Some(e) => (Some(e.vector), Some(prepared.hash)),
            None => (None, None),
        };

        let patch = PostPatch {
            title: Some(prepared.title),
            excerpt: Some(prepared.excerpt),
            body: Some(prepared.body),
            link: Some(source.link.clone()),
            embedding,
            content_hash,
            updated_at: Some(chrono::Utc::now().to_rfc3339()),
        };
        self.store.upsert(&source.id, patch).await?;

        Ok(outcome)
    }
}

#[async_trait]
impl SyncServiceInterface for SyncServiceImpl {
    async fn sync(&self) -> Result<SyncReport> {
        let posts = self.source.fetch_posts(self.page_size).await?;
        info!(
            source = self.source.source_name(),
            count = posts.len(),
            "Fetched blog listing"
        );

        let mut report = SyncReport {
            fetched: posts.len(),
            ..SyncReport::default()
        };

        for post in &posts {
            match self.sync_post(post).await {
                Ok(PostOutcome::Embedded) => report.embedded += 1,
                Ok(PostOutcome::Unembedded) => {
                    warn!(post_id = %post.id, "Stored post without embedding");
                    report.unembedded += 1;
                }
                Ok(PostOutcome::Skipped) => report.skipped += 1,
                Err(e) => {
                    warn!(post_id = %post.id, error = %e, "Failed to sync post");
                    report.failed += 1;
                    report.errors.push(format!("post {}: {e}", post.id));
                }
            }
        }

        info!(
            fetched = report.fetched,
            embedded = report.embedded,
            unembedded = report.unembedded,
            skipped = report.skipped,
            failed = report.failed,
            "Sync finished"
        );
        Ok(report)
    }
}
