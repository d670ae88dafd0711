//! Configuration data types
//!
//! Every section implements `Default` and is `#[serde(default)]`, so a TOML
//! file only has to name the values it changes.

mod logging;
mod providers;
mod retrieval;
mod source;
mod storage;

pub use logging::LoggingConfig;
pub use providers::{EmbeddingConfig, GenerationConfig};
pub use retrieval::RetrievalConfig;
pub use source::SourceConfig;
pub use storage::{StoreConfig, TranscriptConfig};

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub source: SourceConfig,
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
    pub store: StoreConfig,
    pub transcript: TranscriptConfig,
    pub retrieval: RetrievalConfig,
}

impl AppConfig {
    /// Embedding API key, falling back to the generation key
    ///
    /// Both services usually share one Gemini key.
    pub fn embedding_api_key(&self) -> Option<&str> {
        non_blank(self.embedding.api_key.as_deref())
            .or_else(|| non_blank(self.generation.api_key.as_deref()))
    }

    /// Generation API key, falling back to the embedding key
    pub fn generation_api_key(&self) -> Option<&str> {
        non_blank(self.generation.api_key.as_deref())
            .or_else(|| non_blank(self.embedding.api_key.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
