mod audit_sink;
mod candidate_lookup;
mod embedding;
mod pairwise_scorer;
mod retriever;
mod scrubber;

pub use audit_sink::IAuditSink;
pub use candidate_lookup::ICandidateLookup;
pub use embedding::IEmbeddingProvider;
pub use pairwise_scorer::IPairwiseScorer;
pub use retriever::{IDenseRetriever, ILexicalRetriever};
pub use scrubber::{IScrubber, ScrubContext, ScrubOutcome};
