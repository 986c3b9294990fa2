use tessera_core::errors::RetrievalError;
use tessera_core::models::Provenance;
use tessera_core::{Category, ScoredCandidate, TesseraError};
use tessera_retrieval::rerank;
use test_fixtures::builders::doc;
use test_fixtures::fakes::{FailingScorer, ScriptedScorer, ShortScorer};

fn candidates(n: usize) -> Vec<ScoredCandidate> {
    (0..n)
        .map(|i| {
            let id = format!("u{i}");
            ScoredCandidate::from_fused(
                doc(&id, Category::Docs, &format!("text-{i}")),
                1.0 / (i as f64 + 61.0),
                Provenance::default(),
            )
        })
        .collect()
}

#[test]
fn empty_input_never_calls_the_scorer() {
    let scorer = ScriptedScorer::new(&[]);
    let out = rerank("q", Vec::new(), Some(3), &scorer).unwrap();
    assert!(out.is_empty());
    assert_eq!(scorer.calls(), 0);
}

#[test]
fn whole_pool_is_scored_in_one_call() {
    let scorer = ScriptedScorer::new(&[]);
    rerank("q", candidates(7), None, &scorer).unwrap();
    assert_eq!(scorer.batch_sizes(), vec![7]);
}

#[test]
fn top_k_keeps_the_best_scored_candidates() {
    // Reverse the incoming order: the last candidate scores highest.
    let table: Vec<(String, f64)> = (0..10).map(|i| (format!("text-{i}"), i as f64)).collect();
    let refs: Vec<(&str, f64)> = table.iter().map(|(t, s)| (t.as_str(), *s)).collect();
    let scorer = ScriptedScorer::new(&refs);

    let out = rerank("q", candidates(10), Some(3), &scorer).unwrap();
    let ids: Vec<&str> = out.iter().map(|c| c.unit_id.as_str()).collect();
    assert_eq!(ids, ["u9", "u8", "u7"]);
    for c in &out {
        assert_eq!(c.reranked_score, Some(c.final_score));
        assert!(c.fused_score.is_some());
    }
}

#[test]
fn no_top_k_returns_the_full_reordered_set() {
    let scorer = ScriptedScorer::new(&[("text-2", 5.0)]);
    let out = rerank("q", candidates(4), None, &scorer).unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(out[0].unit_id, "u2");
    // Equal scores keep their incoming order.
    let rest: Vec<&str> = out[1..].iter().map(|c| c.unit_id.as_str()).collect();
    assert_eq!(rest, ["u0", "u1", "u3"]);
}

#[test]
fn top_k_larger_than_input_keeps_everything() {
    let scorer = ScriptedScorer::new(&[]);
    assert_eq!(rerank("q", candidates(2), Some(10), &scorer).unwrap().len(), 2);
}

#[test]
fn scorer_failure_fails_the_call() {
    let err = rerank("q", candidates(3), None, &FailingScorer).unwrap_err();
    assert!(err.is_upstream());
    assert!(matches!(
        err,
        TesseraError::Retrieval(RetrievalError::ScorerFailed { .. })
    ));
}

#[test]
fn short_score_vector_is_rejected() {
    let err = rerank("q", candidates(3), None, &ShortScorer).unwrap_err();
    assert!(matches!(
        err,
        TesseraError::Retrieval(RetrievalError::ScoreCountMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn non_finite_scores_are_rejected() {
    let scorer = ScriptedScorer::new(&[("text-1", f64::NAN)]);
    let err = rerank("q", candidates(3), None, &scorer).unwrap_err();
    assert!(matches!(
        err,
        TesseraError::Retrieval(RetrievalError::ScorerFailed { .. })
    ));
}
