//! Blog source configuration types

use blogctx_domain::constants::SYNC_DEFAULT_PAGE_SIZE;
use blogctx_providers::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BLOG_BASE_URL;

/// WordPress listing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceConfig {
    /// Site root, without the `/wp-json` path
    pub base_url: String,

    /// Posts requested per sync
    pub per_page: usize,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BLOG_BASE_URL.to_string(),
            per_page: SYNC_DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}
