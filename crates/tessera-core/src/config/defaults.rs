// Single source of truth for all default values.

// --- Privacy ---
pub const DEFAULT_CONTEXT_SCORING: bool = true;

// --- Retrieval ---
pub const DEFAULT_RRF_K: u32 = 60;
pub const DEFAULT_CANDIDATE_POOL: usize = 50;
pub const DEFAULT_RESULT_LIMIT: usize = 10;
pub const DEFAULT_RERANK_ENABLED: bool = true;

// --- Freshness ---
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 14.0;
pub const DEFAULT_FRESHNESS_WEIGHT: f64 = 0.3;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 768;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
