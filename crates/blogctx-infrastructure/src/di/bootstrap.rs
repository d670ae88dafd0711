//! Application bootstrap
//!
//! [`AppContext`] owns the resolved adapters and hands out use-case
//! services wired to them. Services are built on demand and share the
//! context's `Arc`s, so two services from one context see the same store.
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let reply = context.chat_service().send("How do I start freelancing?").await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use blogctx_application::ports::registry::{
    list_embedding_providers, list_generation_providers, list_knowledge_store_providers,
};
use blogctx_application::{
    ChatServiceImpl, ChatServiceInterface, ChatSettings, EmbeddingClient, RetrievalLimits,
    RetrievalServiceImpl, RetrievalServiceInterface, RetryPolicy, SyncServiceImpl,
    SyncServiceInterface,
};
use blogctx_domain::error::{Error, Result};
use blogctx_domain::ports::{BlogSource, Delay, EmbeddingProvider, GenerationProvider};
use blogctx_domain::repositories::{KnowledgeStore, TranscriptStore};
use blogctx_providers::source::WordPressSource;
use blogctx_providers::transcript::{FilesystemTranscriptStore, InMemoryTranscriptStore};
use blogctx_providers::utils::constructor::http_client;
use tracing::info;

use super::resolver::{ResolvedProviders, resolve_providers};
use crate::config::AppConfig;
use crate::infrastructure::TokioDelay;

/// Registered adapter names with their descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderListing {
    pub embedding: Vec<(&'static str, &'static str)>,
    pub generation: Vec<(&'static str, &'static str)>,
    pub store: Vec<(&'static str, &'static str)>,
}

impl ProviderListing {
    /// Everything currently linked into the binary
    pub fn registered() -> Self {
        Self {
            embedding: list_embedding_providers(),
            generation: list_generation_providers(),
            store: list_knowledge_store_providers(),
        }
    }
}

/// Application context with resolved providers
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    providers: ResolvedProviders,
    source: Arc<dyn BlogSource>,
    transcripts: Arc<dyn TranscriptStore>,
    delay: Arc<dyn Delay>,
}

impl AppContext {
    pub fn embedding_provider(&self) -> Arc<dyn EmbeddingProvider> {
        Arc::clone(&self.providers.embedding)
    }

    pub fn generation_provider(&self) -> Arc<dyn GenerationProvider> {
        Arc::clone(&self.providers.generation)
    }

    pub fn knowledge_store(&self) -> Arc<dyn KnowledgeStore> {
        Arc::clone(&self.providers.store)
    }

    pub fn transcript_store(&self) -> Arc<dyn TranscriptStore> {
        Arc::clone(&self.transcripts)
    }

    /// Embedding client with the configured retry ceiling
    pub fn embedding_client(&self) -> Arc<EmbeddingClient> {
        let policy = RetryPolicy::embedding().with_max_retries(self.config.embedding.max_retries);
        Arc::new(
            EmbeddingClient::new(self.embedding_provider(), Arc::clone(&self.delay))
                .with_policy(policy),
        )
    }

    pub fn sync_service(&self) -> Arc<dyn SyncServiceInterface> {
        Arc::new(
            SyncServiceImpl::new(
                Arc::clone(&self.source),
                self.knowledge_store(),
                self.embedding_client(),
            )
            .with_page_size(self.config.source.per_page),
        )
    }

    pub fn retrieval_service(&self) -> Arc<dyn RetrievalServiceInterface> {
        let retrieval = &self.config.retrieval;
        let limits = RetrievalLimits {
            semantic_top_k: retrieval.top_k,
            keyword_top_k: retrieval.keyword_top_k,
            fallback_top_k: retrieval.fallback_top_k,
        };
        Arc::new(
            RetrievalServiceImpl::new(self.knowledge_store(), self.embedding_client())
                .with_limits(limits),
        )
    }

    pub fn chat_service(&self) -> Arc<dyn ChatServiceInterface> {
        let settings = ChatSettings {
            persona: self.config.generation.persona.clone(),
            transcript_key: self.config.transcript.key.clone(),
            retry: RetryPolicy::generation().with_max_retries(self.config.generation.max_retries),
        };
        Arc::new(
            ChatServiceImpl::new(
                self.retrieval_service(),
                self.generation_provider(),
                self.transcript_store(),
                Arc::clone(&self.delay),
            )
            .with_settings(settings),
        )
    }

    /// Adapters available to configuration
    pub fn providers(&self) -> ProviderListing {
        ProviderListing::registered()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("providers", &self.providers)
            .field("source", &self.source.source_name())
            .finish_non_exhaustive()
    }
}

/// Build the context with the tokio timer for retry delays
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    init_app_with_delay(config, Arc::new(TokioDelay))
}

/// Build the context with an explicit retry delay
pub fn init_app_with_delay(config: AppConfig, delay: Arc<dyn Delay>) -> Result<AppContext> {
    let providers = resolve_providers(&config)?;

    let timeout = Duration::from_secs(config.source.timeout_secs);
    let client = http_client(timeout).map_err(Error::config)?;
    let source: Arc<dyn BlogSource> =
        Arc::new(WordPressSource::new(&config.source.base_url, timeout, client));

    let transcripts: Arc<dyn TranscriptStore> = match &config.transcript.path {
        Some(dir) => Arc::new(FilesystemTranscriptStore::new(dir.clone())),
        None => Arc::new(InMemoryTranscriptStore::new()),
    };

    info!(
        embedding = providers.embedding.provider_name(),
        generation = providers.generation.provider_name(),
        store = providers.store.store_name(),
        source = %config.source.base_url,
        "Application context initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        providers,
        source,
        transcripts,
        delay,
    })
}
