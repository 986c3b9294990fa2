use crate::errors::TesseraResult;
use crate::models::{QueryFilters, RankedHit};

/// Dense-vector retrieval. Returns `(unit_id, distance)` best-first
/// (ascending distance).
pub trait IDenseRetriever: Send + Sync {
    fn search(&self, query: &str, limit: usize, filters: &QueryFilters)
        -> TesseraResult<Vec<RankedHit>>;
}

/// Lexical retrieval over one tokenizer variant. Returns
/// `(unit_id, relevance)` best-first (descending relevance).
pub trait ILexicalRetriever: Send + Sync {
    fn search(&self, query: &str, limit: usize, filters: &QueryFilters)
        -> TesseraResult<Vec<RankedHit>>;
}
