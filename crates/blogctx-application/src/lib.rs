//! Application Layer - blogctx
//!
//! Use cases that turn the domain ports into a grounded chat assistant.
//!
//! ## Use Cases
//!
//! - Post synchronization: fetch the blog listing, embed new or changed posts,
//!   upsert them into the knowledge store
//! - Retrieval: rank cached posts against a query with keyword and recency
//!   fallbacks, then format the context block
//! - Chat: maintain the transcript and ask the generation provider for replies
//!
//! ## Ports
//!
//! - `ports::services::*`: use case interfaces
//! - `ports::registry::*`: linkme registries the provider crate submits into
//!
//! ## Dependencies
//!
//! Only `blogctx-domain` plus async, serialization and logging crates.
//! Concrete adapters are wired in by `blogctx-infrastructure`.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
