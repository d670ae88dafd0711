//! # blogctx Domain Layer
//!
//! Core types for grounding a chat assistant on a blog's posts.
//!
//! ## Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | `Post`, `SourcePost`, `Message`, `Transcript` |
//! | [`value_objects`] | `Embedding`, `ScoredPost`, `RetrievalTier` |
//! | [`ports`] | Provider traits (embedding, generation, blog source) and the `Delay` port |
//! | [`repositories`] | `KnowledgeStore` and `TranscriptStore` |
//! | [`utils`] | Markup sanitizer, cosine similarity, content hashing |
//! | [`error`] | Domain `Error` and `Result` |
//!
//! This crate has no I/O of its own. Adapters live in `blogctx-providers`.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod repositories;
pub mod utils;
pub mod value_objects;

pub use entities::{Message, Post, PostPatch, Role, SourcePost, Transcript};
pub use error::{Error, Result};
pub use value_objects::{Embedding, RetrievalOutcome, RetrievalTier, ScoredPost};
