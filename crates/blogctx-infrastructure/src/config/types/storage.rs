//! Knowledge store and transcript configuration types

use blogctx_domain::constants::TRANSCRIPT_DEFAULT_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_STORE_PATH, DEFAULT_STORE_PROVIDER, DEFAULT_TRANSCRIPT_DIR};

/// Knowledge store configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Registered store name (`memory` or `filesystem`)
    pub provider: String,

    /// JSON file backing the `filesystem` store
    pub path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            path: Some(PathBuf::from(DEFAULT_STORE_PATH)),
        }
    }
}

/// Transcript persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Directory holding one JSON blob per key; in-memory when unset
    pub path: Option<PathBuf>,

    /// Storage key of the active transcript
    pub key: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from(DEFAULT_TRANSCRIPT_DIR)),
            key: TRANSCRIPT_DEFAULT_KEY.to_string(),
        }
    }
}
