//! Transcript Store Implementations

pub mod filesystem;
pub mod in_memory;

pub use filesystem::FilesystemTranscriptStore;
pub use in_memory::InMemoryTranscriptStore;
