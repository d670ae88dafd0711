//! Transcript Store Interface

use async_trait::async_trait;

use crate::error::Result;

/// Repository: Persisted Transcript Blob
///
/// Holds one opaque string per key; the chat service serializes the whole
/// transcript into it after every change. Parsing happens in the caller so a
/// corrupt blob can be ignored rather than failing the load.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Stored blob, `None` when nothing was saved under `key`
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob under `key`
    async fn save(&self, key: &str, blob: &str) -> Result<()>;

    /// Remove the blob under `key`; missing keys are not an error
    async fn clear(&self, key: &str) -> Result<()>;
}
