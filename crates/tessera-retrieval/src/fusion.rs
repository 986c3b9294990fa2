//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Merges the dense ranking with the code and natural-language lexical
//! rankings without normalizing their raw scores. Only ids the dense stage
//! retrieved are eligible; lexical rankings refine the order, they never
//! introduce candidates.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use tessera_core::models::{Provenance, StageHit};
use tessera_core::RankedHit;

/// A dense-retrieved id after fusion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusedCandidate {
    pub unit_id: String,
    /// Fused RRF score (higher = more relevant).
    pub fused_score: f64,
    pub provenance: Provenance,
}

impl FusedCandidate {
    /// 1-indexed dense rank. Every fused candidate has one.
    pub fn dense_rank(&self) -> usize {
        self.provenance.dense.map_or(usize::MAX, |h| h.rank)
    }
}

/// Contribution of one ranking position.
pub fn rrf_contribution(k: u32, rank: usize) -> f64 {
    1.0 / (f64::from(k) + rank as f64)
}

/// First occurrence of each id, with its 1-indexed rank.
fn first_ranks(ranking: &[RankedHit]) -> HashMap<&str, StageHit> {
    let mut ranks = HashMap::with_capacity(ranking.len());
    for (i, hit) in ranking.iter().enumerate() {
        ranks.entry(hit.unit_id.as_str()).or_insert(StageHit {
            rank: i + 1,
            raw_score: hit.score,
        });
    }
    ranks
}

/// Fuse the three rankings.
///
/// Output is sorted by fused score descending; ties go to the better dense
/// rank. A duplicate id within one ranking counts once, at its best position.
pub fn fuse(
    dense: &[RankedHit],
    lexical_code: &[RankedHit],
    lexical_nlp: &[RankedHit],
    k: u32,
) -> Vec<FusedCandidate> {
    let code_ranks = first_ranks(lexical_code);
    let nlp_ranks = first_ranks(lexical_nlp);
    let dense_ranks = first_ranks(dense);

    let mut candidates: Vec<FusedCandidate> = dense
        .iter()
        .enumerate()
        .filter(|(i, hit)| dense_ranks.get(hit.unit_id.as_str()).is_some_and(|h| h.rank == i + 1))
        .map(|(i, hit)| {
            let id = hit.unit_id.as_str();
            let provenance = Provenance {
                dense: Some(StageHit {
                    rank: i + 1,
                    raw_score: hit.score,
                }),
                lexical_code: code_ranks.get(id).copied(),
                lexical_nlp: nlp_ranks.get(id).copied(),
            };
            let fused_score: f64 = [provenance.dense, provenance.lexical_code, provenance.lexical_nlp]
                .iter()
                .flatten()
                .map(|h| rrf_contribution(k, h.rank))
                .sum();
            FusedCandidate {
                unit_id: hit.unit_id.clone(),
                fused_score,
                provenance,
            }
        })
        .collect();

    candidates.sort_by(fused_order);
    candidates
}

/// Fused score descending, then dense rank ascending.
pub fn fused_order(a: &FusedCandidate, b: &FusedCandidate) -> Ordering {
    b.fused_score
        .total_cmp(&a.fused_score)
        .then_with(|| a.dense_rank().cmp(&b.dense_rank()))
}
