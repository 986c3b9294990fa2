//! RetrievalEngine: orchestrates the full query pipeline.
//!
//! dense + lexical search → RRF fusion → hydrate → filter → freshness →
//! intent → rerank → truncate. Each stage consumes the previous stage's
//! output; any upstream failure fails the query.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use tessera_core::config::{FreshnessConfig, RetrievalConfig};
use tessera_core::errors::TesseraResult;
use tessera_core::models::FreshnessParams;
use tessera_core::traits::{ICandidateLookup, IDenseRetriever, ILexicalRetriever, IPairwiseScorer};
use tessera_core::{QueryRequest, ScoredCandidate, TesseraConfig};
use tessera_observability::events;

use crate::freshness::boost_freshness;
use crate::fusion::{fuse, FusedCandidate};
use crate::intent::IntentBooster;
use crate::reranker::rerank;

/// The retrieval collaborators a query needs.
pub struct RetrievalSources {
    pub dense: Arc<dyn IDenseRetriever>,
    /// Lexical index built with the code tokenizer.
    pub lexical_code: Arc<dyn ILexicalRetriever>,
    /// Lexical index built with the natural-language tokenizer.
    pub lexical_nlp: Arc<dyn ILexicalRetriever>,
    pub lookup: Arc<dyn ICandidateLookup>,
}

/// The main retrieval engine.
pub struct RetrievalEngine {
    sources: RetrievalSources,
    scorer: Option<Arc<dyn IPairwiseScorer>>,
    intent: IntentBooster,
    config: RetrievalConfig,
    freshness: FreshnessConfig,
}

impl RetrievalEngine {
    /// Build an engine from configuration. Fails if the configured intent
    /// rules do not validate.
    pub fn new(sources: RetrievalSources, config: &TesseraConfig) -> TesseraResult<Self> {
        Ok(Self {
            sources,
            scorer: None,
            intent: IntentBooster::from_config(&config.intent)?,
            config: config.retrieval.clone(),
            freshness: config.freshness.clone(),
        })
    }

    /// Attach the pairwise scorer used for reranking.
    pub fn with_scorer(mut self, scorer: Arc<dyn IPairwiseScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn with_intent_booster(mut self, intent: IntentBooster) -> Self {
        self.intent = intent;
        self
    }

    /// Run the pipeline for one request.
    pub fn search(&self, request: &QueryRequest) -> TesseraResult<Vec<ScoredCandidate>> {
        self.search_at(request, Utc::now())
    }

    /// [`search`](Self::search) with an explicit "now" for freshness.
    pub fn search_at(&self, request: &QueryRequest, now: DateTime<Utc>) -> TesseraResult<Vec<ScoredCandidate>> {
        let limit = if request.limit == 0 {
            self.config.default_limit
        } else {
            request.limit
        };
        let pool = self.config.candidate_pool.max(limit);
        let query = request.query.as_str();
        let filters = &request.filters;

        // Stage 1: candidate gathering.
        let dense = self.sources.dense.search(query, pool, filters)?;
        let lexical_code = self.sources.lexical_code.search(query, pool, filters)?;
        let lexical_nlp = self.sources.lexical_nlp.search(query, pool, filters)?;
        debug!(
            dense = dense.len(),
            lexical_code = lexical_code.len(),
            lexical_nlp = lexical_nlp.len(),
            "retrieval sources returned"
        );

        let fused = fuse(&dense, &lexical_code, &lexical_nlp, self.config.rrf_k);
        let fused_count = fused.len();
        if fused.is_empty() {
            debug!("no candidates found");
            events::query_completed(0, 0, false);
            return Ok(Vec::new());
        }

        // Stage 2: hydrate and filter.
        let mut candidates = self.hydrate(fused)?;
        candidates.retain(|c| {
            filters.matches(c.category, c.service.as_deref(), c.repository.as_deref())
        });

        // Stage 3: boosters, in order.
        if let Some(params) = self.freshness_params(request) {
            candidates = boost_freshness(candidates, params.half_life_days, params.weight, now);
        }
        candidates = self.intent.boost_intent(query, candidates);

        // Stage 4: precision rerank.
        let mut reranked = false;
        if request.rerank && self.config.rerank_enabled {
            match &self.scorer {
                Some(scorer) => {
                    candidates = rerank(query, candidates, self.config.rerank_top_k, scorer.as_ref())?;
                    reranked = true;
                }
                None => events::rerank_skipped("no pairwise scorer configured"),
            }
        } else {
            events::rerank_skipped("reranking disabled");
        }

        candidates.truncate(limit);
        events::query_completed(fused_count, candidates.len(), reranked);
        info!(
            candidates = fused_count,
            returned = candidates.len(),
            "retrieval complete"
        );
        Ok(candidates)
    }

    fn freshness_params(&self, request: &QueryRequest) -> Option<FreshnessParams> {
        request.freshness.or_else(|| {
            self.freshness.enabled.then_some(FreshnessParams {
                half_life_days: self.freshness.half_life_days,
                weight: self.freshness.weight,
            })
        })
    }

    /// Attach display data in fused order. Ids the lookup cannot resolve are
    /// dropped.
    fn hydrate(&self, fused: Vec<FusedCandidate>) -> TesseraResult<Vec<ScoredCandidate>> {
        let ids: Vec<String> = fused.iter().map(|c| c.unit_id.clone()).collect();
        let mut docs: HashMap<_, _> = self.sources.lookup.lookup(&ids)?;

        let total = fused.len();
        let hydrated: Vec<ScoredCandidate> = fused
            .into_iter()
            .filter_map(|f| {
                docs.remove(&f.unit_id)
                    .map(|doc| ScoredCandidate::from_fused(doc, f.fused_score, f.provenance))
            })
            .collect();

        let missing = total - hydrated.len();
        if missing > 0 {
            events::degradation_triggered(
                "candidate_lookup",
                &format!("{missing} of {total} fused ids unresolved"),
                "dropped unresolved candidates",
            );
        }
        Ok(hydrated)
    }
}
