//! Domain Port Interfaces
//!
//! - [`providers`]: external services (embedding, generation, blog CMS)
//! - [`infrastructure`]: runtime services the use cases need injected (delays)
//!
//! Storage ports live in [`crate::repositories`].

pub mod infrastructure;
pub mod providers;

pub use infrastructure::Delay;
pub use providers::{BlogSource, EmbeddingProvider, GenerationProvider, GenerationRequest};
