//! Generation Provider Registry

use std::sync::Arc;

use blogctx_domain::ports::GenerationProvider;

/// Configuration for generation provider creation
#[derive(Debug, Clone, Default)]
pub struct GenerationProviderConfig {
    /// Provider name (e.g., "gemini", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl GenerationProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Registry entry for generation providers
pub struct GenerationProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&GenerationProviderConfig) -> Result<Arc<dyn GenerationProvider>, String>,
}

#[linkme::distributed_slice]
pub static GENERATION_PROVIDERS: [GenerationProviderEntry] = [..];

/// Resolve generation provider by name from registry
pub fn resolve_generation_provider(
    config: &GenerationProviderConfig,
) -> Result<Arc<dyn GenerationProvider>, String> {
    let provider_name = &config.provider;

    for entry in GENERATION_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = GENERATION_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown generation provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered generation providers as (name, description)
pub fn list_generation_providers() -> Vec<(&'static str, &'static str)> {
    GENERATION_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
