//! Dynamic Provider Resolver
//!
//! Turns the configured provider names into instances through the
//! registries in `blogctx_application::ports::registry`. Nothing here knows
//! the concrete adapter types.

use std::sync::Arc;

use blogctx_application::ports::registry::{
    EmbeddingProviderConfig, GenerationProviderConfig, KnowledgeStoreConfig,
    resolve_embedding_provider, resolve_generation_provider, resolve_knowledge_store,
};
use blogctx_domain::error::{Error, Result};
use blogctx_domain::ports::{EmbeddingProvider, GenerationProvider};
use blogctx_domain::repositories::KnowledgeStore;

use crate::config::AppConfig;

/// Providers resolved from configuration
#[derive(Clone)]
pub struct ResolvedProviders {
    pub embedding: Arc<dyn EmbeddingProvider>,
    pub generation: Arc<dyn GenerationProvider>,
    pub store: Arc<dyn KnowledgeStore>,
}

impl std::fmt::Debug for ResolvedProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedProviders")
            .field("embedding", &self.embedding.provider_name())
            .field("generation", &self.generation.provider_name())
            .field("store", &self.store.store_name())
            .finish()
    }
}

/// Resolve every registry-backed provider named in `config`
pub fn resolve_providers(config: &AppConfig) -> Result<ResolvedProviders> {
    let embedding = resolve_embedding_provider(&embedding_registry_config(config))
        .map_err(|e| Error::config(format!("Failed to resolve embedding provider: {e}")))?;

    let generation = resolve_generation_provider(&generation_registry_config(config))
        .map_err(|e| Error::config(format!("Failed to resolve generation provider: {e}")))?;

    let store = resolve_knowledge_store(&store_registry_config(config))
        .map_err(|e| Error::config(format!("Failed to resolve knowledge store: {e}")))?;

    Ok(ResolvedProviders {
        embedding,
        generation,
        store,
    })
}

/// Registry config for the embedding section
pub fn embedding_registry_config(config: &AppConfig) -> EmbeddingProviderConfig {
    let section = &config.embedding;
    let mut registry =
        EmbeddingProviderConfig::new(&section.provider).with_timeout_secs(section.timeout_secs);
    if let Some(model) = &section.model {
        registry = registry.with_model(model);
    }
    if let Some(api_key) = config.embedding_api_key() {
        registry = registry.with_api_key(api_key);
    }
    if let Some(base_url) = &section.base_url {
        registry = registry.with_base_url(base_url);
    }
    registry
}

/// Registry config for the generation section
pub fn generation_registry_config(config: &AppConfig) -> GenerationProviderConfig {
    let section = &config.generation;
    let mut registry =
        GenerationProviderConfig::new(&section.provider).with_timeout_secs(section.timeout_secs);
    if let Some(model) = &section.model {
        registry = registry.with_model(model);
    }
    if let Some(api_key) = config.generation_api_key() {
        registry = registry.with_api_key(api_key);
    }
    if let Some(base_url) = &section.base_url {
        registry = registry.with_base_url(base_url);
    }
    registry
}

/// Registry config for the store section
pub fn store_registry_config(config: &AppConfig) -> KnowledgeStoreConfig {
    let mut registry = KnowledgeStoreConfig::new(&config.store.provider);
    if let Some(path) = &config.store.path {
        registry = registry.with_path(path.clone());
    }
    registry
}
