//! Use Case Implementations
//!
//! | Use Case | Interface |
//! |----------|-----------|
//! | [`SyncServiceImpl`] | [`crate::ports::SyncServiceInterface`] |
//! | [`RetrievalServiceImpl`] | [`crate::ports::RetrievalServiceInterface`] |
//! | [`ChatServiceImpl`] | [`crate::ports::ChatServiceInterface`] |
//!
//! [`EmbeddingClient`] and [`RetryPolicy`] are shared building blocks.

pub mod chat_service;
pub mod embedding_client;
pub mod retrieval_service;
pub mod retry;
pub mod sync_service;

pub use chat_service::{ChatServiceImpl, ChatSettings, build_system_instruction};
pub use embedding_client::EmbeddingClient;
pub use retrieval_service::{RetrievalLimits, RetrievalServiceImpl, format_context, keywords};
pub use retry::RetryPolicy;
pub use sync_service::SyncServiceImpl;
