//! In-memory transcript store

use std::collections::HashMap;

use async_trait::async_trait;
use blogctx_domain::error::Result;
use blogctx_domain::repositories::TranscriptStore;
use tokio::sync::RwLock;

/// Transcript blobs held in a map
#[derive(Debug, Default)]
pub struct InMemoryTranscriptStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl InMemoryTranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, blob: &str) -> Result<()> {
        self.blobs
            .write()
            .await
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<()> {
        self.blobs.write().await.remove(key);
        Ok(())
    }
}
