//! Knowledge Store Registry
//!
//! Same mechanism as the embedding registry, for the post record store.

use std::path::PathBuf;
use std::sync::Arc;

use blogctx_domain::repositories::KnowledgeStore;

/// Configuration for knowledge store creation
#[derive(Debug, Clone, Default)]
pub struct KnowledgeStoreConfig {
    /// Provider name (e.g., "memory", "filesystem")
    pub provider: String,
    /// Backing file for persistent stores
    pub path: Option<PathBuf>,
}

impl KnowledgeStoreConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the backing file
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Registry entry for knowledge stores
pub struct KnowledgeStoreEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create store instance
    pub factory: fn(&KnowledgeStoreConfig) -> Result<Arc<dyn KnowledgeStore>, String>,
}

#[linkme::distributed_slice]
pub static KNOWLEDGE_STORE_PROVIDERS: [KnowledgeStoreEntry] = [..];

/// Resolve knowledge store by name from registry
pub fn resolve_knowledge_store(
    config: &KnowledgeStoreConfig,
) -> Result<Arc<dyn KnowledgeStore>, String> {
    let provider_name = &config.provider;

    for entry in KNOWLEDGE_STORE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = KNOWLEDGE_STORE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown knowledge store '{}'. Available stores: {:?}",
        provider_name, available
    ))
}

/// List all registered knowledge stores as (name, description)
pub fn list_knowledge_store_providers() -> Vec<(&'static str, &'static str)> {
    KNOWLEDGE_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
