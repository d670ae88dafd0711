//! Chat Use Case
//!
//! Keeps the linear transcript and produces assistant replies grounded on the
//! retrieved context. The transcript is persisted as one JSON blob after
//! every change.

use std::sync::Arc;

use async_trait::async_trait;
use blogctx_domain::constants::{
    API_KEY_MISSING_NOTICE, DEFAULT_PERSONA, GENERATION_FAILED_MESSAGE, QUICK_REPLIES,
    TRANSCRIPT_DEFAULT_KEY,
};
use blogctx_domain::error::{Error, Result};
use blogctx_domain::ports::{Delay, GenerationProvider, GenerationRequest};
use blogctx_domain::repositories::TranscriptStore;
use blogctx_domain::{Message, Transcript};
use tracing::{error, info, warn};

use super::retry::RetryPolicy;
use crate::ports::services::{ChatServiceInterface, RetrievalServiceInterface};

/// Persona, storage key and retry policy for the chat service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSettings {
    pub persona: String,
    pub transcript_key: String,
    pub retry: RetryPolicy,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            persona: DEFAULT_PERSONA.to_string(),
            transcript_key: TRANSCRIPT_DEFAULT_KEY.to_string(),
            retry: RetryPolicy::generation(),
        }
    }
}

/// System instruction sent with every generation request
pub fn build_system_instruction(persona: &str, context: &str) -> String {
    if context.is_empty() {
        format!("{persona}\n\n# Blog articles\n\nNo related articles were found.")
    } else {
        format!("{persona}\n\n# Blog articles\n\n{context}")
    }
}

/// Chat service implementation
pub struct ChatServiceImpl {
    retrieval: Arc<dyn RetrievalServiceInterface>,
    generation: Arc<dyn GenerationProvider>,
    transcripts: Arc<dyn TranscriptStore>,
    delay: Arc<dyn Delay>,
    settings: ChatSettings,
}

impl ChatServiceImpl {
    /// Create new chat service with injected dependencies
    pub fn new(
        retrieval: Arc<dyn RetrievalServiceInterface>,
        generation: Arc<dyn GenerationProvider>,
        transcripts: Arc<dyn TranscriptStore>,
        delay: Arc<dyn Delay>,
    ) -> Self {
        Self {
            retrieval,
            generation,
            transcripts,
            delay,
            settings: ChatSettings::default(),
        }
    }

    /// Override persona, key or retry policy
    #[must_use]
    pub fn with_settings(mut self, settings: ChatSettings) -> Self {
        self.settings = settings;
        self
    }

    async fn persist(&self, transcript: &Transcript) -> Result<()> {
        let blob = serde_json::to_string(transcript)?;
        self.transcripts
            .save(&self.settings.transcript_key, &blob)
            .await
    }

    /// Stored transcript; a missing or unparsable blob reads as empty
    async fn read_stored(&self) -> Result<Transcript> {
        let Some(blob) = self.transcripts.load(&self.settings.transcript_key).await? else {
            return Ok(Transcript::new());
        };

        match serde_json::from_str(&blob) {
            Ok(transcript) => Ok(transcript),
            Err(e) => {
                warn!(key = %self.settings.transcript_key, error = %e, "Ignoring malformed transcript");
                Ok(Transcript::new())
            }
        }
    }

    async fn generate_reply(&self, transcript: &Transcript, query: &str) -> String {
        let context = self.retrieval.retrieve(query).await;
        let request = GenerationRequest {
            system_instruction: build_system_instruction(&self.settings.persona, &context),
            messages: transcript.messages().to_vec(),
        };

        let result = self
            .settings
            .retry
            .run(self.delay.as_ref(), "generate", || {
                self.generation.generate(&request)
            })
            .await;

        match result {
            Ok(reply) => reply,
            Err(e) => {
                error!(
                    provider = self.generation.provider_name(),
                    attempts = self.settings.retry.max_attempts(),
                    error = %e,
                    "Generation failed after retries"
                );
                GENERATION_FAILED_MESSAGE.to_string()
            }
        }
    }
}

#[async_trait]
impl ChatServiceInterface for ChatServiceImpl {
    async fn load(&self) -> Result<Transcript> {
        let transcript = self.read_stored().await?;
        if !transcript.is_empty() {
            return Ok(transcript);
        }

        let seeded = Transcript::greeting();
        self.persist(&seeded).await?;
        Ok(seeded)
    }

    async fn send(&self, text: &str) -> Result<Message> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::invalid_argument("message text is empty"));
        }

        let mut transcript = self.load().await?;
        transcript.push(Message::user(text));
        self.persist(&transcript).await?;

        let reply = if self.generation.is_configured() {
            self.generate_reply(&transcript, text).await
        } else {
            warn!(
                provider = self.generation.provider_name(),
                "Generation provider has no API key"
            );
            API_KEY_MISSING_NOTICE.to_string()
        };

        let message = Message::assistant(reply);
        transcript.push(message.clone());
        self.persist(&transcript).await?;
        info!(messages = transcript.len(), "Reply appended");

        Ok(message)
    }

    async fn reset(&self) -> Result<Transcript> {
        self.transcripts.clear(&self.settings.transcript_key).await?;
        let seeded = Transcript::greeting();
        self.persist(&seeded).await?;
        Ok(seeded)
    }

    fn quick_replies(&self) -> &'static [&'static str] {
        QUICK_REPLIES
    }
}
