//! Embedding and generation provider configuration types

use blogctx_domain::constants::{DEFAULT_PERSONA, EMBEDDING_MAX_RETRIES, GENERATION_MAX_RETRIES};
use blogctx_providers::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMBEDDING_PROVIDER, DEFAULT_GENERATION_PROVIDER};

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name
    pub provider: String,

    /// Model override; the provider default applies when unset
    pub model: Option<String>,

    pub api_key: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Retries after the first failed request
    pub max_retries: u32,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            api_key: None,
            base_url: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_retries: EMBEDDING_MAX_RETRIES,
        }
    }
}

/// Generation provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Registered provider name
    pub provider: String,

    /// Model override; the provider default applies when unset
    pub model: Option<String>,

    pub api_key: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Retries after the first failed request
    pub max_retries: u32,

    /// Leading part of the system instruction
    pub persona: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_GENERATION_PROVIDER.to_string(),
            model: None,
            api_key: None,
            base_url: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_retries: GENERATION_MAX_RETRIES,
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}
