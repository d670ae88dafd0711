//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Post`] | Cached blog post record held by the knowledge store |
//! | [`SourcePost`] | Raw listing item returned by the blog CMS |
//! | [`Message`] | One transcript entry |
//! | [`Transcript`] | Append-only message sequence |

/// Chat transcript entities
pub mod message;
/// Blog post entities
pub mod post;

pub use message::{Message, Role, Transcript};
pub use post::{Post, PostPatch, Rendered, SourcePost};
