//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text returned by a provider |
//! | [`ScoredPost`] | Post selected by the retriever with its score |
//! | [`RetrievalTier`] | Which selection tier produced a retrieval result |

/// Semantic embedding value objects
pub mod embedding;
/// Retrieval result value objects
pub mod retrieval;

pub use embedding::Embedding;
pub use retrieval::{RetrievalOutcome, RetrievalTier, ScoredPost};
