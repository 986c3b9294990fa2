//! Precision reranking through an external pairwise scorer.

use tessera_core::errors::{RetrievalError, TesseraResult};
use tessera_core::models::sort_best_first;
use tessera_core::traits::IPairwiseScorer;
use tessera_core::ScoredCandidate;

/// Score every `(query, text)` pair in one batch call, sort by the new
/// scores and keep the best `top_k` (all when `None`).
///
/// An empty input returns immediately without calling the scorer. A scorer
/// failure, a score count that differs from the pair count, or a non-finite
/// score fails the call; candidates are never returned half-reranked.
pub fn rerank(
    query: &str,
    mut candidates: Vec<ScoredCandidate>,
    top_k: Option<usize>,
    scorer: &dyn IPairwiseScorer,
) -> TesseraResult<Vec<ScoredCandidate>> {
    if candidates.is_empty() {
        return Ok(candidates);
    }

    let pairs: Vec<(&str, &str)> = candidates.iter().map(|c| (query, c.text.as_str())).collect();
    let scores = scorer.score(&pairs)?;
    if scores.len() != pairs.len() {
        return Err(RetrievalError::ScoreCountMismatch {
            expected: pairs.len(),
            actual: scores.len(),
        }
        .into());
    }
    if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
        return Err(RetrievalError::ScorerFailed {
            reason: format!("non-finite score {bad}"),
        }
        .into());
    }

    for (candidate, score) in candidates.iter_mut().zip(scores) {
        candidate.set_reranked(score);
    }
    sort_best_first(&mut candidates);
    if let Some(k) = top_k {
        candidates.truncate(k);
    }
    Ok(candidates)
}
