//! Gemini Generation Provider
//!
//! Implements the `GenerationProvider` port on Google's `generateContent` API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use blogctx_application::ports::registry::{
    GENERATION_PROVIDERS, GenerationProviderConfig, GenerationProviderEntry,
};
use blogctx_domain::error::{Error, Result};
use blogctx_domain::ports::{GenerationProvider, GenerationRequest};
use blogctx_domain::{Message, Role};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONTENT_TYPE_JSON, GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_GENERATION_MODEL,
    GEMINI_ROLE_MODEL, GEMINI_ROLE_USER,
};
use crate::utils::constructor;
use crate::utils::{ApiKind, HttpResponseUtils};

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<WireContent<'a>>,
    system_instruction: SystemInstruction<'a>,
}

#[derive(Serialize)]
struct WireContent<'a> {
    role: &'static str,
    parts: [WirePart<'a>; 1],
}

#[derive(Serialize)]
struct SystemInstruction<'a> {
    parts: [WirePart<'a>; 1],
}

#[derive(Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => GEMINI_ROLE_USER,
        Role::Assistant => GEMINI_ROLE_MODEL,
    }
}

/// Conversation turns in wire form
///
/// `contents` has to open with a user turn, so leading assistant messages
/// (the greeting) are left out.
fn wire_contents(messages: &[Message]) -> Vec<WireContent<'_>> {
    messages
        .iter()
        .skip_while(|m| m.role == Role::Assistant)
        .map(|m| WireContent {
            role: wire_role(m.role),
            parts: [WirePart { text: &m.content }],
        })
        .collect()
}

/// Gemini text generation provider
pub struct GeminiGenerationProvider {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GeminiGenerationProvider {
    /// Create a new Gemini generation provider
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

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerationProvider for GeminiGenerationProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(Error::generation("Gemini API key is not configured"));
        }

        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        let url = format!("{}/v1beta/models/{model}:generateContent", self.base_url);
        let payload = GenerateContentRequest {
            contents: wire_contents(&request.messages),
            system_instruction: SystemInstruction {
                parts: [WirePart {
                    text: &request.system_instruction,
                }],
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
            .map_err(|e| ApiKind::Generation.request_error("Gemini", &e, self.timeout))?;

        let body: GenerateContentResponse =
            HttpResponseUtils::check_and_parse(response, "Gemini", ApiKind::Generation).await?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::generation("Gemini returned no candidate text"));
        }
        Ok(text)
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
    config: &GenerationProviderConfig,
) -> std::result::Result<Arc<dyn GenerationProvider>, String> {
    let timeout = constructor::timeout_or_default(config.timeout_secs);
    let http_client = constructor::http_client(timeout)?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| GEMINI_DEFAULT_GENERATION_MODEL.to_string());

    Ok(Arc::new(GeminiGenerationProvider::new(
        constructor::normalize_api_key(config.api_key.as_deref()),
        config.base_url.clone(),
        model,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(GENERATION_PROVIDERS)]
static GEMINI_PROVIDER: GenerationProviderEntry = GenerationProviderEntry {
    name: "gemini",
    description: "Google Gemini generateContent (gemini-2.0-flash)",
    factory: gemini_factory,
};
