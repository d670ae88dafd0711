//! Configuration management
//!
//! `AppConfig` is assembled by [`ConfigLoader`] from defaults, an optional
//! TOML file and `BLOGCTX__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, ConfigSource};
pub use types::{
    AppConfig, EmbeddingConfig, GenerationConfig, LoggingConfig, RetrievalConfig, SourceConfig,
    StoreConfig, TranscriptConfig,
};
