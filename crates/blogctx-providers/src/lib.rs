//! # blogctx - Provider Implementations
//!
//! Adapters for the ports declared in `blogctx-domain`. Embedding,
//! generation and knowledge store adapters register themselves in the
//! `blogctx-application` registries.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Gemini, Null |
//! | Generation | `GenerationProvider` | Gemini, Null |
//! | Blog source | `BlogSource` | WordPress REST |
//! | Knowledge store | `KnowledgeStore` | InMemory, Filesystem |
//! | Transcript store | `TranscriptStore` | InMemory, Filesystem |
//!
//! ## Usage
//!
//! ```ignore
//! use blogctx_providers::source::WordPressSource;
//! use blogctx_providers::store::InMemoryKnowledgeStore;
//! ```

pub use blogctx_domain::error::{Error, Result};
pub use blogctx_domain::ports::{BlogSource, EmbeddingProvider, GenerationProvider};
pub use blogctx_domain::repositories::{KnowledgeStore, TranscriptStore};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Text generation provider implementations
pub mod generation;

/// Blog CMS listing adapters
pub mod source;

/// Knowledge store implementations
pub mod store;

/// Transcript store implementations
pub mod transcript;
