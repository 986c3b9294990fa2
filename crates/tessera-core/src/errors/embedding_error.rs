/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider returned {actual} vectors for {expected} texts")]
    BatchSizeMismatch { expected: usize, actual: usize },

    #[error("zero-norm vector for unit {unit_id}")]
    ZeroVector { unit_id: String },
}

impl EmbeddingError {
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::InferenceFailed { .. } | Self::BatchSizeMismatch { .. }
        )
    }
}
