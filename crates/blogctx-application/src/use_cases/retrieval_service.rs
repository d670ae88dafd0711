//! Retrieval Use Case
//!
//! Selects the posts that ground a reply. Three tiers are tried in order:
//!
//! | Tier | Selection |
//! |------|-----------|
//! | Semantic | cosine similarity to the query embedding, best first |
//! | Keyword | title or body contains a query token, store order |
//! | Recent | first posts in store order |

use std::sync::Arc;

use async_trait::async_trait;
use blogctx_domain::constants::{
    CONTEXT_BLOCK_SEPARATOR, KEYWORD_MIN_EXCLUSIVE_LEN, KEYWORD_SEPARATORS,
    RETRIEVAL_FALLBACK_TOP_K, RETRIEVAL_KEYWORD_TOP_K, RETRIEVAL_SEMANTIC_TOP_K,
    STORE_UNAVAILABLE_MESSAGE,
};
use blogctx_domain::error::Result;
use blogctx_domain::repositories::KnowledgeStore;
use blogctx_domain::utils::cosine_similarity;
use blogctx_domain::{Post, RetrievalOutcome, RetrievalTier, ScoredPost};
use tracing::{debug, warn};

use super::embedding_client::EmbeddingClient;
use crate::ports::services::RetrievalServiceInterface;

/// How many posts each tier keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrievalLimits {
    pub semantic_top_k: usize,
    pub keyword_top_k: usize,
    pub fallback_top_k: usize,
}

impl Default for RetrievalLimits {
    fn default() -> Self {
        Self {
            semantic_top_k: RETRIEVAL_SEMANTIC_TOP_K,
            keyword_top_k: RETRIEVAL_KEYWORD_TOP_K,
            fallback_top_k: RETRIEVAL_FALLBACK_TOP_K,
        }
    }
}

/// Lowercased query tokens used for keyword matching
///
/// Splits on whitespace and [`KEYWORD_SEPARATORS`], dropping single-character
/// tokens.
///
/// ```rust
/// use blogctx_application::keywords;
///
/// assert_eq!(keywords("Freelance、節税？ a"), vec!["freelance", "節税"]);
/// ```
pub fn keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || KEYWORD_SEPARATORS.contains(&c))
        .filter(|token| token.chars().count() > KEYWORD_MIN_EXCLUSIVE_LEN)
        .map(str::to_string)
        .collect()
}

/// Render selected posts as the context block
///
/// An empty selection renders as an empty string.
pub fn format_context(posts: &[ScoredPost]) -> String {
    posts
        .iter()
        .map(|scored| {
            let post = &scored.post;
            format!(
                "Title: {}\nContent: {}\nURL: {}",
                post.title,
                post.display_content(),
                post.link
            )
        })
        .collect::<Vec<_>>()
        .join(CONTEXT_BLOCK_SEPARATOR)
}

fn rank_semantic(query: &[f32], posts: &[Post], top_k: usize) -> Vec<ScoredPost> {
    let mut scored: Vec<ScoredPost> = posts
        .iter()
        .filter_map(|post| {
            let vector = post.embedding.as_deref().filter(|v| !v.is_empty())?;
            match cosine_similarity(query, vector) {
                Ok(score) => {
                    let score = if score.is_nan() { 0.0 } else { score };
                    Some(ScoredPost::new(post.clone(), score))
                }
                Err(e) => {
                    warn!(post_id = %post.id, error = %e, "Skipping post with mismatched embedding");
                    None
                }
            }
        })
        .collect();

    // Stable: equal scores keep store order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_k);
    scored
}

fn match_keywords(query: &str, posts: &[Post], top_k: usize) -> Vec<ScoredPost> {
    let tokens = keywords(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    posts
        .iter()
        .filter(|post| {
            let title = post.title.to_lowercase();
            let body = post.body.to_lowercase();
            tokens
                .iter()
                .any(|token| title.contains(token.as_str()) || body.contains(token.as_str()))
        })
        .take(top_k)
        .cloned()
        .map(ScoredPost::unscored)
        .collect()
}

/// Retrieval service implementation
pub struct RetrievalServiceImpl {
    store: Arc<dyn KnowledgeStore>,
    embedder: Arc<EmbeddingClient>,
    limits: RetrievalLimits,
}

impl RetrievalServiceImpl {
    /// Create new retrieval service with injected dependencies
    pub fn new(store: Arc<dyn KnowledgeStore>, embedder: Arc<EmbeddingClient>) -> Self {
        Self {
            store,
            embedder,
            limits: RetrievalLimits::default(),
        }
    }

    /// Override the per-tier limits
    #[must_use]
    pub fn with_limits(mut self, limits: RetrievalLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[async_trait]
impl RetrievalServiceInterface for RetrievalServiceImpl {
    async fn retrieve_posts(&self, query: &str) -> Result<RetrievalOutcome> {
        let posts = self.store.scan().await?;
        if posts.is_empty() {
            return Ok(RetrievalOutcome {
                tier: RetrievalTier::Empty,
                posts: Vec::new(),
            });
        }

        if let Some(embedding) = self.embedder.embed(query).await {
            let ranked = rank_semantic(&embedding.vector, &posts, self.limits.semantic_top_k);
            if !ranked.is_empty() {
                return Ok(RetrievalOutcome {
                    tier: RetrievalTier::Semantic,
                    posts: ranked,
                });
            }
        }

        let matched = match_keywords(query, &posts, self.limits.keyword_top_k);
        if !matched.is_empty() {
            return Ok(RetrievalOutcome {
                tier: RetrievalTier::Keyword,
                posts: matched,
            });
        }

        Ok(RetrievalOutcome {
            tier: RetrievalTier::Recent,
            posts: posts
                .into_iter()
                .take(self.limits.fallback_top_k)
                .map(ScoredPost::unscored)
                .collect(),
        })
    }

    async fn retrieve(&self, query: &str) -> String {
        match self.retrieve_posts(query).await {
            Ok(outcome) => {
                debug!(tier = %outcome.tier, count = outcome.posts.len(), "Retrieved posts");
                format_context(&outcome.posts)
            }
            Err(e) => {
                warn!(store = self.store.store_name(), error = %e, "Knowledge store unavailable");
                STORE_UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}
