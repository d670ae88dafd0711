//! Content hashing for embedding invalidation

use sha2::{Digest, Sha256};

/// Hex SHA-256 of the text an embedding is computed from
pub fn content_hash(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
