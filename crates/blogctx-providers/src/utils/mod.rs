//! Provider Utilities
//!
//! Shared helpers for the HTTP adapters and file-backed stores.

pub mod constructor;
mod file;
mod http_response;

pub use file::JsonFile;
pub use http_response::{ApiKind, HttpResponseUtils};
