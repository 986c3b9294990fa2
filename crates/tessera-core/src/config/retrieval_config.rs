use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// RRF k-value for rank fusion.
    pub rrf_k: u32,
    /// How many hits to request from each retrieval source.
    pub candidate_pool: usize,
    /// Result count when a request does not set one.
    pub default_limit: usize,
    pub rerank_enabled: bool,
    /// Cap applied by the reranker. `None` keeps the full reordered set.
    pub rerank_top_k: Option<usize>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            rrf_k: defaults::DEFAULT_RRF_K,
            candidate_pool: defaults::DEFAULT_CANDIDATE_POOL,
            default_limit: defaults::DEFAULT_RESULT_LIMIT,
            rerank_enabled: defaults::DEFAULT_RERANK_ENABLED,
            rerank_top_k: None,
        }
    }
}
