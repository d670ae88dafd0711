//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// ## Business Rules
///
/// - `dimensions` equals `vector.len()`
/// - Vectors from different models are not comparable
///
/// ## Example
///
/// ```rust
/// use blogctx_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "text-embedding-004");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding, deriving `dimensions` from the vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }
}
