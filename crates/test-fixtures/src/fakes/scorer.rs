use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tessera_core::errors::{RetrievalError, TesseraResult};
use tessera_core::traits::IPairwiseScorer;

/// Scores each pair by looking its text up in a table; unknown text scores 0.
#[derive(Default)]
pub struct ScriptedScorer {
    scores: HashMap<String, f64>,
    calls: AtomicUsize,
    batch_sizes: Mutex<Vec<usize>>,
}

impl ScriptedScorer {
    pub fn new(scores: &[(&str, f64)]) -> Self {
        Self {
            scores: scores.iter().map(|(t, s)| (t.to_string(), *s)).collect(),
            calls: AtomicUsize::new(0),
            batch_sizes: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of pairs in each call, in call order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batch_sizes.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl IPairwiseScorer for ScriptedScorer {
    fn score(&self, pairs: &[(&str, &str)]) -> TesseraResult<Vec<f64>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.batch_sizes
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(pairs.len());
        Ok(pairs
            .iter()
            .map(|(_, text)| self.scores.get(*text).copied().unwrap_or(0.0))
            .collect())
    }
}

/// Always fails.
pub struct FailingScorer;

impl IPairwiseScorer for FailingScorer {
    fn score(&self, _pairs: &[(&str, &str)]) -> TesseraResult<Vec<f64>> {
        Err(RetrievalError::ScorerFailed {
            reason: "cross-encoder timed out".to_string(),
        }
        .into())
    }
}

/// Returns one score fewer than it was given.
pub struct ShortScorer;

impl IPairwiseScorer for ShortScorer {
    fn score(&self, pairs: &[(&str, &str)]) -> TesseraResult<Vec<f64>> {
        Ok(vec![1.0; pairs.len().saturating_sub(1)])
    }
}
