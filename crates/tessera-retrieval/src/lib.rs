//! # tessera-retrieval
//!
//! The query side of Tessera. One dense and two lexical rankings are merged
//! with Reciprocal Rank Fusion, reweighted for recency and query intent, then
//! reordered by an external pairwise scorer. Stages run strictly in that
//! order; [`RetrievalEngine`] wires them to the retrieval sources.

pub mod engine;
pub mod freshness;
pub mod fusion;
pub mod intent;
pub mod reranker;

pub use engine::{RetrievalEngine, RetrievalSources};
pub use freshness::boost_freshness;
pub use fusion::{fuse, FusedCandidate};
pub use intent::{IntentBooster, IntentRule};
pub use reranker::rerank;
