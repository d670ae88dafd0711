//! Provider Registry System
//!
//! Compile-time registration of adapters via `linkme` distributed slices.
//! Each adapter in `blogctx-providers` submits an entry; infrastructure
//! resolves the one named in configuration.
//!
//! ```text
//! 1. Adapter defines:   #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//!                       static ENTRY: EmbeddingProviderEntry = ...
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static EMBEDDING_PROVIDERS: [Entry] = [..]
//! 3. Config selects:    "provider = gemini" → GeminiEmbeddingProvider
//! ```
//!
//! ## Registering a Provider (in blogctx-providers)
//!
//! ```ignore
//! use blogctx_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static GEMINI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "gemini",
//!     description: "Google Gemini embedContent API",
//!     factory: gemini_factory,
//! };
//! ```
//!
//! ## Resolving a Provider (in blogctx-infrastructure)
//!
//! ```ignore
//! use blogctx_application::ports::registry::{EmbeddingProviderConfig, resolve_embedding_provider};
//!
//! let provider = resolve_embedding_provider(&EmbeddingProviderConfig::new("gemini"))?;
//! ```

pub mod embedding;
pub mod generation;
pub mod knowledge_store;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use generation::{
    GENERATION_PROVIDERS, GenerationProviderConfig, GenerationProviderEntry,
    list_generation_providers, resolve_generation_provider,
};
pub use knowledge_store::{
    KNOWLEDGE_STORE_PROVIDERS, KnowledgeStoreConfig, KnowledgeStoreEntry,
    list_knowledge_store_providers, resolve_knowledge_store,
};
