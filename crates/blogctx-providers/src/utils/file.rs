//! JSON file helpers for the filesystem stores

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use blogctx_domain::error::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
    description: &'static str,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>, description: &'static str) -> Self {
        Self {
            path: path.into(),
            description,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw contents, `None` when the file does not exist
    pub async fn read_string(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to read {} {}", self.description, self.path.display()),
                e,
            )),
        }
    }

    /// Decoded contents, `None` when the file does not exist
    pub async fn read<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        let Some(content) = self.read_string().await? else {
            return Ok(None);
        };
        serde_json::from_str(&content).map(Some).map_err(|e| {
            Error::store(format!(
                "Failed to parse {} {}: {e}",
                self.description,
                self.path.display()
            ))
        })
    }

    /// Overwrite with `content`, creating parent directories
    pub async fn write_string(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(
                    format!("Failed to create directory for {}", self.description),
                    e,
                )
            })?;
        }
        tokio::fs::write(&self.path, content).await.map_err(|e| {
            Error::io_with_source(
                format!("Failed to write {} {}", self.description, self.path.display()),
                e,
            )
        })
    }

    /// Overwrite with pretty-printed JSON
    pub async fn write<T: Serialize>(&self, data: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        self.write_string(&content).await
    }

    /// Delete the file; a missing file is not an error
    pub async fn remove(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io_with_source(
                format!("Failed to remove {} {}", self.description, self.path.display()),
                e,
            )),
        }
    }
}
