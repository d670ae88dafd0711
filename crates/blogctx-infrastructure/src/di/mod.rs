//! Composition root
//!
//! ```text
//! AppConfig → resolve_providers (linkme registries) → AppContext → use cases
//! ```

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{AppContext, ProviderListing, init_app, init_app_with_delay};
pub use resolver::{ResolvedProviders, resolve_providers};
