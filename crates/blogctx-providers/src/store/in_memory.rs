//! In-memory knowledge store
//!
//! Data is lost on restart. Used by tests and as the default store.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use blogctx_application::ports::registry::{
    KNOWLEDGE_STORE_PROVIDERS, KnowledgeStoreConfig, KnowledgeStoreEntry,
};
use blogctx_domain::error::Result;
use blogctx_domain::repositories::KnowledgeStore;
use blogctx_domain::{Post, PostPatch};
use tokio::sync::RwLock;

/// Merge `patch` into the record under `id`, creating it when absent
pub(crate) fn apply_patch(posts: &mut BTreeMap<String, Post>, id: &str, patch: PostPatch) -> Post {
    match posts.get_mut(id) {
        Some(post) => {
            post.merge(patch);
            post.clone()
        }
        None => {
            let post = patch.into_post(id);
            posts.insert(id.to_string(), post.clone());
            post
        }
    }
}

/// In-memory knowledge store
#[derive(Debug, Default)]
pub struct InMemoryKnowledgeStore {
    posts: RwLock<BTreeMap<String, Post>>,
}

impl InMemoryKnowledgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `posts`, keyed by their ids
    pub fn from_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        Self {
            posts: RwLock::new(posts.into_iter().map(|p| (p.id.clone(), p)).collect()),
        }
    }
}

#[async_trait]
impl KnowledgeStore for InMemoryKnowledgeStore {
    async fn get(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn upsert(&self, id: &str, patch: PostPatch) -> Result<Post> {
        let mut posts = self.posts.write().await;
        Ok(apply_patch(&mut posts, id, patch))
    }

    async fn scan(&self) -> Result<Vec<Post>> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    fn store_name(&self) -> &str {
        "memory"
    }
}

#[linkme::distributed_slice(KNOWLEDGE_STORE_PROVIDERS)]
static MEMORY_STORE: KnowledgeStoreEntry = KnowledgeStoreEntry {
    name: "memory",
    description: "In-memory store, cleared on exit",
    factory: |_config: &KnowledgeStoreConfig| Ok(Arc::new(InMemoryKnowledgeStore::new())),
};
