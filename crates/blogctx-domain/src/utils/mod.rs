//! Pure helpers shared by the use cases
//!
//! Nothing here performs I/O.

pub mod hashing;
pub mod similarity;
pub mod text;

pub use hashing::content_hash;
pub use similarity::cosine_similarity;
pub use text::{sanitize, strip_tags};
