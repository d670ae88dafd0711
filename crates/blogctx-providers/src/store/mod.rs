//! Knowledge Store Implementations
//!
//! Both stores keep records in a `BTreeMap`, so scans come back in ascending
//! key order.
//!
//! | Store | Registry name | Persistence |
//! |-------|---------------|-------------|
//! | [`InMemoryKnowledgeStore`] | `memory` | none |
//! | [`FilesystemKnowledgeStore`] | `filesystem` | one JSON file, rewritten on every upsert |

pub mod filesystem;
pub mod in_memory;

pub use filesystem::FilesystemKnowledgeStore;
pub use in_memory::InMemoryKnowledgeStore;
