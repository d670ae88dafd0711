//! # blogctx Infrastructure Layer
//!
//! Cross-cutting concerns and the composition root.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | `AppConfig` and the figment `ConfigLoader` |
//! | [`logging`] | `tracing-subscriber` initialisation |
//! | [`error_ext`] | `ErrorContext` for mapping foreign errors |
//! | [`di`] | Provider resolution and `AppContext` bootstrap |
//! | [`infrastructure`] | Runtime adapters such as the tokio `Delay` |
//!
//! ## Usage
//!
//! ```ignore
//! use blogctx_infrastructure::config::ConfigLoader;
//! use blogctx_infrastructure::di::init_app;
//!
//! let config = ConfigLoader::new().load()?;
//! let context = init_app(config)?;
//! let report = context.sync_service().sync().await?;
//! ```

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod infrastructure;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
