//! Filesystem knowledge store
//!
//! Keeps every record in one JSON object (`id -> Post`). The file is read on
//! first access and rewritten after each upsert while the write lock is held.
//! A failed write rolls the cached record back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use blogctx_application::ports::registry::{
    KNOWLEDGE_STORE_PROVIDERS, KnowledgeStoreConfig, KnowledgeStoreEntry,
};
use blogctx_domain::error::{Error, Result};
use blogctx_domain::repositories::KnowledgeStore;
use blogctx_domain::{Post, PostPatch};
use tokio::sync::{OnceCell, RwLock};
use tracing::debug;

use super::in_memory::apply_patch;
use crate::utils::JsonFile;

type PostMap = BTreeMap<String, Post>;

/// JSON file backed knowledge store
pub struct FilesystemKnowledgeStore {
    file: JsonFile,
    posts: OnceCell<RwLock<PostMap>>,
}

impl FilesystemKnowledgeStore {
    /// Store backed by the file at `path`; the file may not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: JsonFile::new(path, "knowledge store"),
            posts: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn posts(&self) -> Result<&RwLock<PostMap>> {
        self.posts
            .get_or_try_init(|| async {
                let posts: PostMap = self.file.read().await?.unwrap_or_default();
                debug!(path = %self.file.path().display(), count = posts.len(), "Loaded knowledge store");
                Ok::<_, Error>(RwLock::new(posts))
            })
            .await
    }
}

#[async_trait]
impl KnowledgeStore for FilesystemKnowledgeStore {
    async fn get(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.posts().await?.read().await.get(id).cloned())
    }

    async fn upsert(&self, id: &str, patch: PostPatch) -> Result<Post> {
        let mut posts = self.posts().await?.write().await;
        let previous = posts.get(id).cloned();
        let post = apply_patch(&mut posts, id, patch);

        // Memory must not get ahead of disk
        if let Err(e) = self.file.write(&*posts).await {
            match previous {
                Some(previous) => posts.insert(id.to_string(), previous),
                None => posts.remove(id),
            };
            return Err(e);
        }
        Ok(post)
    }

    async fn scan(&self) -> Result<Vec<Post>> {
        Ok(self.posts().await?.read().await.values().cloned().collect())
    }

    fn store_name(&self) -> &str {
        "filesystem"
    }
}

fn filesystem_factory(
    config: &KnowledgeStoreConfig,
) -> std::result::Result<Arc<dyn KnowledgeStore>, String> {
    let path = config
        .path
        .clone()
        .ok_or_else(|| "filesystem knowledge store requires a path".to_string())?;
    Ok(Arc::new(FilesystemKnowledgeStore::new(path)))
}

#[linkme::distributed_slice(KNOWLEDGE_STORE_PROVIDERS)]
static FILESYSTEM_STORE: KnowledgeStoreEntry = KnowledgeStoreEntry {
    name: "filesystem",
    description: "Single JSON file, rewritten after every upsert",
    factory: filesystem_factory,
};
