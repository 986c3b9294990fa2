use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tessera_core::errors::{RetrievalError, TesseraResult};
use tessera_core::traits::{IDenseRetriever, ILexicalRetriever};
use tessera_core::{QueryFilters, RankedHit};

/// Returns a fixed ranking (truncated to `limit`) for any query.
pub struct StaticRetriever {
    hits: Vec<RankedHit>,
    calls: AtomicUsize,
    last_limit: AtomicUsize,
    last_filters: Mutex<Option<QueryFilters>>,
}

impl StaticRetriever {
    pub fn new(hits: Vec<RankedHit>) -> Self {
        Self {
            hits,
            calls: AtomicUsize::new(0),
            last_limit: AtomicUsize::new(0),
            last_filters: Mutex::new(None),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_limit(&self) -> usize {
        self.last_limit.load(Ordering::SeqCst)
    }

    pub fn last_filters(&self) -> Option<QueryFilters> {
        self.last_filters
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }

    fn respond(&self, limit: usize, filters: &QueryFilters) -> Vec<RankedHit> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_limit.store(limit, Ordering::SeqCst);
        *self.last_filters.lock().unwrap_or_else(|p| p.into_inner()) = Some(filters.clone());
        self.hits.iter().take(limit).cloned().collect()
    }
}

impl IDenseRetriever for StaticRetriever {
    fn search(&self, _query: &str, limit: usize, filters: &QueryFilters) -> TesseraResult<Vec<RankedHit>> {
        Ok(self.respond(limit, filters))
    }
}

impl ILexicalRetriever for StaticRetriever {
    fn search(&self, _query: &str, limit: usize, filters: &QueryFilters) -> TesseraResult<Vec<RankedHit>> {
        Ok(self.respond(limit, filters))
    }
}

/// Every search fails.
pub struct FailingRetriever {
    source_name: &'static str,
}

impl FailingRetriever {
    pub fn new(source_name: &'static str) -> Self {
        Self { source_name }
    }

    fn fail(&self) -> TesseraResult<Vec<RankedHit>> {
        Err(RetrievalError::SearchFailed {
            source_name: self.source_name.to_string(),
            reason: "index offline".to_string(),
        }
        .into())
    }
}

impl IDenseRetriever for FailingRetriever {
    fn search(&self, _query: &str, _limit: usize, _filters: &QueryFilters) -> TesseraResult<Vec<RankedHit>> {
        self.fail()
    }
}

impl ILexicalRetriever for FailingRetriever {
    fn search(&self, _query: &str, _limit: usize, _filters: &QueryFilters) -> TesseraResult<Vec<RankedHit>> {
        self.fail()
    }
}
