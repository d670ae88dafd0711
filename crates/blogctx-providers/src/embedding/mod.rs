//! Embedding Provider Implementations
//!
//! | Provider | Registry name | Notes |
//! |----------|---------------|-------|
//! | [`GeminiEmbeddingProvider`] | `gemini` | `embedContent`, one text per request |
//! | [`NullEmbeddingProvider`] | `null` | Offline character-hash vectors |

pub mod gemini;
pub mod null;

pub use gemini::GeminiEmbeddingProvider;
pub use null::NullEmbeddingProvider;
