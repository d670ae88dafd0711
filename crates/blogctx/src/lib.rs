//! # blogctx
//!
//! A chat assistant grounded on a blog's posts. Posts are pulled from the
//! WordPress REST listing, embedded and cached; each question is answered
//! by a generation model given the closest posts as context.
//!
//! ## Architecture
//!
//! - `domain` - entities, ports and pure helpers
//! - `application` - sync, retrieval and chat use cases
//! - `infrastructure` - configuration, logging and bootstrap
//! - [`cli`] - the `blogctx` command line
//!
//! ## Example
//!
//! ```ignore
//! use blogctx::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?)?;
//! context.sync_service().sync().await?;
//! let reply = context.chat_service().send("What can freelancers deduct?").await?;
//! println!("{}", reply.content);
//! ```

pub mod cli;

/// Domain layer - core types
pub mod domain {
    pub use blogctx_domain::*;
}

/// Application layer - use cases and their interfaces
pub mod application {
    pub use blogctx_application::*;
}

/// Infrastructure layer - config, logging and composition root
pub mod infrastructure {
    pub use blogctx_infrastructure::*;
}

pub use domain::*;
pub use infrastructure::{AppConfig, AppContext, ConfigLoader, init_app};
