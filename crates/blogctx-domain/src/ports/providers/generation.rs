use async_trait::async_trait;

use crate::entities::Message;
use crate::error::Result;

/// Prompt sent to a text generation model
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Persona plus the retrieved context block
    pub system_instruction: String,
    /// Conversation so far, oldest first, ending with the user turn
    pub messages: Vec<Message>,
}

/// Text Generation Interface
///
/// One attempt per call. The chat service owns retries and the canned
/// fallback reply.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate the assistant reply for `request`
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Identifier of this implementation
    fn provider_name(&self) -> &str;

    /// Whether credentials are present
    fn is_configured(&self) -> bool {
        true
    }
}
