//! Cosine similarity

use crate::error::{Error, Result};

/// Cosine similarity of two equal-length vectors
///
/// The result is clamped to `[-1, 1]`. Returns `0.0` when either vector has
/// zero norm (which includes two empty vectors), and an `InvalidArgument`
/// error when the lengths differ. Overflowing inputs can still yield NaN.
///
/// ```rust
/// use blogctx_domain::utils::cosine_similarity;
///
/// let score = cosine_similarity(&[1.0, 0.0], &[0.9, 0.1]).unwrap();
/// assert!(score > 0.99);
/// assert!(cosine_similarity(&[1.0], &[1.0, 0.0]).is_err());
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::invalid_argument(format!(
            "cannot compare vectors of {} and {} dimensions",
            a.len(),
            b.len()
        )));
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
    }
}
