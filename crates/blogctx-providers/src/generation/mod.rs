//! Text Generation Provider Implementations
//!
//! | Provider | Registry name | Notes |
//! |----------|---------------|-------|
//! | [`GeminiGenerationProvider`] | `gemini` | `generateContent` |
//! | [`NullGenerationProvider`] | `null` | Echoes the last user turn |

pub mod gemini;
pub mod null;

pub use gemini::GeminiGenerationProvider;
pub use null::NullGenerationProvider;
