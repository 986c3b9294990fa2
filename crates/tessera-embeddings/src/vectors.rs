//! Dimension checks and normalization for embedding vectors.

use tessera_core::errors::{EmbeddingError, TesseraResult};

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> TesseraResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}

/// Scale to unit L2 norm in place. Returns `false` (leaving the vector
/// untouched) when the norm is zero or not finite.
pub fn l2_normalize(embedding: &mut [f32]) -> bool {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    if !norm.is_finite() || norm <= f32::EPSILON {
        return false;
    }
    for v in embedding.iter_mut() {
        *v /= norm;
    }
    true
}

/// Cosine similarity of two L2-normalized vectors (their dot product).
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let min_len = a.len().min(b.len());
    a[..min_len]
        .iter()
        .zip(&b[..min_len])
        .map(|(x, y)| x * y)
        .sum()
}
