//! Repository ports
//!
//! | Port | Backing data |
//! |------|--------------|
//! | [`KnowledgeStore`] | Cached post records keyed by post id |
//! | [`TranscriptStore`] | Serialized transcript blob keyed by a string |

pub mod knowledge_store;
pub mod transcript_store;

pub use knowledge_store::KnowledgeStore;
pub use transcript_store::TranscriptStore;
