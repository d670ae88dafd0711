//! Null generation provider for offline use

use std::sync::Arc;

use async_trait::async_trait;
use blogctx_application::ports::registry::{
    GENERATION_PROVIDERS, GenerationProviderConfig, GenerationProviderEntry,
};
use blogctx_domain::Role;
use blogctx_domain::error::Result;
use blogctx_domain::ports::{GenerationProvider, GenerationRequest};

/// Replies with the last user turn
#[derive(Debug, Default)]
pub struct NullGenerationProvider;

impl NullGenerationProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GenerationProvider for NullGenerationProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let last_user = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map_or("", |m| m.content.as_str());
        Ok(format!("[null] {last_user}"))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[linkme::distributed_slice(GENERATION_PROVIDERS)]
static NULL_PROVIDER: GenerationProviderEntry = GenerationProviderEntry {
    name: "null",
    description: "Offline echo generator for development",
    factory: |_config: &GenerationProviderConfig| Ok(Arc::new(NullGenerationProvider::new())),
};
