//! Application Port Interfaces
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`services`] | Interfaces implemented by the use cases |
//! | [`registry`] | Provider auto-registration slices and resolvers |

pub mod registry;
pub mod services;

pub use services::{
    ChatServiceInterface, RetrievalServiceInterface, SyncReport, SyncServiceInterface,
};
