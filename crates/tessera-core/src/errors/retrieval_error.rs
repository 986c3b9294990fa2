/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("{source_name} retrieval failed: {reason}")]
    SearchFailed { source_name: String, reason: String },

    #[error("candidate lookup failed: {reason}")]
    LookupFailed { reason: String },

    #[error("pairwise scorer failed: {reason}")]
    ScorerFailed { reason: String },

    #[error("pairwise scorer returned {actual} scores for {expected} pairs")]
    ScoreCountMismatch { expected: usize, actual: usize },
}

impl RetrievalError {
    pub fn is_upstream(&self) -> bool {
        true
    }
}
