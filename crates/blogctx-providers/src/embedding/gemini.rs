//! Gemini Embedding Provider
//!
//! Implements the `EmbeddingProvider` port on Google's `embedContent` API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use blogctx_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use blogctx_domain::error::{Error, Result};
use blogctx_domain::ports::EmbeddingProvider;
use blogctx_domain::value_objects::Embedding;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONTENT_TYPE_JSON, GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_EMBEDDING_MODEL,
};
use crate::utils::constructor;
use crate::utils::{ApiKind, HttpResponseUtils};

#[derive(Serialize)]
struct EmbedContentRequest<'a> {
    model: String,
    content: RequestContent<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: ContentEmbedding,
}

#[derive(Deserialize)]
struct ContentEmbedding {
    #[serde(default)]
    values: Vec<f32>,
}

/// Gemini embedding provider
///
/// Receives its HTTP client via constructor injection. An empty API key
/// leaves the provider unconfigured: [`EmbeddingProvider::is_configured`]
/// reports `false` and requests fail without touching the network.
///
/// ## Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use blogctx_providers::embedding::GeminiEmbeddingProvider;
///
/// let provider = GeminiEmbeddingProvider::new(
///     "AIza-your-api-key".to_string(),
///     None,
///     "text-embedding-004".to_string(),
///     Duration::from_secs(30),
///     reqwest::Client::new(),
/// );
/// ```
pub struct GeminiEmbeddingProvider {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GeminiEmbeddingProvider {
    /// Create a new Gemini embedding provider
    ///
    /// # Arguments
    /// * `api_key` - Google AI API key (may be empty)
    /// * `base_url` - Optional custom base URL (defaults to Google AI API)
    /// * `model` - Model name (e.g., "text-embedding-004")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::normalize_api_key(Some(&api_key)),
            base_url: constructor::effective_url(base_url.as_deref(), GEMINI_DEFAULT_BASE_URL),
            model,
            timeout,
            http_client,
        }
    }

    /// Model name without a `models/` prefix
    pub fn api_model_name(&self) -> &str {
        self.model.strip_prefix("models/").unwrap_or(&self.model)
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_single_embedding(&self, text: &str) -> Result<Embedding> {
        if self.api_key.is_empty() {
            return Err(Error::embedding("Gemini API key is not configured"));
        }

        let model = self.api_model_name();
        let url = format!("{}/v1beta/models/{model}:embedContent", self.base_url);
        let payload = EmbedContentRequest {
            model: format!("models/{model}"),
            content: RequestContent {
                parts: [RequestPart { text }],
            },
        };

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiKind::Embedding.request_error("Gemini", &e, self.timeout))?;

        let body: EmbedContentResponse =
            HttpResponseUtils::check_and_parse(response, "Gemini", ApiKind::Embedding).await?;

        if body.embedding.values.is_empty() {
            return Err(Error::embedding("Gemini returned an empty embedding"));
        }
        Ok(Embedding::new(body.embedding.values, self.model.clone()))
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        // embedContent takes one text per request
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.fetch_single_embedding(text).await?);
        }
        Ok(results)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

fn gemini_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let timeout = constructor::timeout_or_default(config.timeout_secs);
    let http_client = constructor::http_client(timeout)?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| GEMINI_DEFAULT_EMBEDDING_MODEL.to_string());

    Ok(Arc::new(GeminiEmbeddingProvider::new(
        constructor::normalize_api_key(config.api_key.as_deref()),
        config.base_url.clone(),
        model,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static GEMINI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "gemini",
    description: "Google Gemini embedding provider (text-embedding-004)",
    factory: gemini_factory,
};
