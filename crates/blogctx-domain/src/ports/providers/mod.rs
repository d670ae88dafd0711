//! External provider ports

pub mod blog_source;
pub mod embedding;
pub mod generation;

pub use blog_source::BlogSource;
pub use embedding::EmbeddingProvider;
pub use generation::{GenerationProvider, GenerationRequest};
