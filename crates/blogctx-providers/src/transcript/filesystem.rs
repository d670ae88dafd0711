//! Filesystem transcript store
//!
//! One file per key: `<dir>/<key>.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use blogctx_domain::error::{Error, Result};
use blogctx_domain::repositories::TranscriptStore;
use tokio::sync::Mutex;

use crate::constants::TRANSCRIPT_FILE_EXTENSION;
use crate::utils::JsonFile;

/// Directory of transcript blobs
pub struct FilesystemTranscriptStore {
    dir: PathBuf,
    // Serializes writers so a save never interleaves with a clear.
    write_lock: Mutex<()>,
}

impl FilesystemTranscriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file(&self, key: &str) -> Result<JsonFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(Error::invalid_argument(format!(
                "transcript key '{key}' must be ASCII letters, digits, '_', '-' or '.'"
            )));
        }

        let path = self.dir.join(format!("{key}.{TRANSCRIPT_FILE_EXTENSION}"));
        Ok(JsonFile::new(path, "transcript"))
    }
}

#[async_trait]
impl TranscriptStore for FilesystemTranscriptStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        self.file(key)?.read_string().await
    }

    async fn save(&self, key: &str, blob: &str) -> Result<()> {
        let file = self.file(key)?;
        let _guard = self.write_lock.lock().await;
        file.write_string(blob).await
    }

    async fn clear(&self, key: &str) -> Result<()> {
        let file = self.file(key)?;
        let _guard = self.write_lock.lock().await;
        file.remove().await
    }
}
