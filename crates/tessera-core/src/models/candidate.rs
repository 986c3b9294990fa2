use serde::{Deserialize, Serialize};

use crate::source_types::Category;

/// One entry of a retrieval source's best-first ranking.
///
/// For the dense source `score` is a distance (lower is better); for lexical
/// sources it is a relevance score (higher is better). Fusion only uses the
/// position, the raw value is kept for provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHit {
    pub unit_id: String,
    pub score: f64,
}

impl RankedHit {
    pub fn new(unit_id: impl Into<String>, score: f64) -> Self {
        Self {
            unit_id: unit_id.into(),
            score,
        }
    }
}

/// Where a candidate sat in one input ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageHit {
    /// 1-indexed rank.
    pub rank: usize,
    pub raw_score: f64,
}

/// Per-source rank and raw score, kept for observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub dense: Option<StageHit>,
    pub lexical_code: Option<StageHit>,
    pub lexical_nlp: Option<StageHit>,
}

/// Display data for a fused id, supplied by the candidate lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub unit_id: String,
    pub text: String,
    pub category: Category,
    pub timestamp: Option<String>,
    pub repository: Option<String>,
    pub service: Option<String>,
}

/// A candidate moving through fuse → freshness → intent → rerank.
///
/// Every stage writes its own score field and then `final_score`, which is the
/// score the candidate is currently ordered by. Once the candidate leaves the
/// pipeline `final_score` is its result score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub unit_id: String,
    pub text: String,
    pub category: Category,
    pub timestamp: Option<String>,
    pub repository: Option<String>,
    pub service: Option<String>,
    pub provenance: Provenance,
    pub fused_score: Option<f64>,
    /// Score after the freshness and intent boosters.
    pub boosted_score: Option<f64>,
    pub reranked_score: Option<f64>,
    pub final_score: f64,
}

impl ScoredCandidate {
    /// Hydrate a fused id with its display data.
    pub fn from_fused(doc: CandidateDocument, fused_score: f64, provenance: Provenance) -> Self {
        Self {
            unit_id: doc.unit_id,
            text: doc.text,
            category: doc.category,
            timestamp: doc.timestamp,
            repository: doc.repository,
            service: doc.service,
            provenance,
            fused_score: Some(fused_score),
            boosted_score: None,
            reranked_score: None,
            final_score: fused_score,
        }
    }

    /// The score a booster starts from: the output of the most recent stage.
    ///
    /// In pipeline order this is the fused score for freshness, and the
    /// reranked score whenever a reranker already ran.
    pub fn base_score(&self) -> f64 {
        self.final_score
    }

    /// Record a booster result.
    pub fn set_boosted(&mut self, score: f64) {
        self.boosted_score = Some(score);
        self.final_score = score;
    }

    /// Record a pairwise-scorer result.
    pub fn set_reranked(&mut self, score: f64) {
        self.reranked_score = Some(score);
        self.final_score = score;
    }
}

/// Sort best-first by `final_score`. Stable, so equal scores keep their
/// incoming order.
pub fn sort_best_first(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
}
