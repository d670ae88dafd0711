//! Application Service Port Interfaces
//!
//! Contracts the use cases implement. The CLI and the chat service hold
//! these as trait objects so each piece can be swapped in tests.

use async_trait::async_trait;
use blogctx_domain::error::Result;
use blogctx_domain::{Message, RetrievalOutcome, Transcript};
use serde::Serialize;

// ============================================================================
// Sync Service Interface
// ============================================================================

/// Post Synchronization Interface
#[async_trait]
pub trait SyncServiceInterface: Send + Sync {
    /// Fetch the listing and refresh the knowledge store
    ///
    /// Fails only when the listing itself cannot be fetched; per-post
    /// failures are counted in the report.
    async fn sync(&self) -> Result<SyncReport>;
}

/// Result of a sync run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Posts returned by the listing
    pub fetched: usize,
    /// Posts upserted with a freshly computed embedding
    pub embedded: usize,
    /// Posts upserted although the embedding request gave up
    pub unembedded: usize,
    /// Posts whose cached record was still fresh
    pub skipped: usize,
    /// Posts that could not be read or written
    pub failed: usize,
    /// One message per failed post
    pub errors: Vec<String>,
}

// ============================================================================
// Retrieval Service Interface
// ============================================================================

/// Context Retrieval Interface
#[async_trait]
pub trait RetrievalServiceInterface: Send + Sync {
    /// Selected posts and the tier that selected them
    async fn retrieve_posts(&self, query: &str) -> Result<RetrievalOutcome>;

    /// Formatted context block for `query`
    ///
    /// Never fails: a store failure yields the fixed unavailable message.
    async fn retrieve(&self, query: &str) -> String;
}

// ============================================================================
// Chat Service Interface
// ============================================================================

/// Chat Orchestration Interface
#[async_trait]
pub trait ChatServiceInterface: Send + Sync {
    /// Persisted transcript, seeded with the greeting when empty
    async fn load(&self) -> Result<Transcript>;

    /// Append `text` as a user turn and return the assistant reply
    async fn send(&self, text: &str) -> Result<Message>;

    /// Drop the transcript and reseed the greeting
    async fn reset(&self) -> Result<Transcript>;

    /// Suggested prompts
    fn quick_replies(&self) -> &'static [&'static str];
}
