use crate::errors::TesseraResult;

/// Cross-encoder style relevance scoring.
///
/// Order-preserving: the i-th score belongs to the i-th `(query, text)` pair.
pub trait IPairwiseScorer: Send + Sync {
    fn score(&self, pairs: &[(&str, &str)]) -> TesseraResult<Vec<f64>>;
}
