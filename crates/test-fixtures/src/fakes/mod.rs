//! Fake implementations of the collaborator traits.
//!
//! Each fake counts its calls so tests can assert how often (and whether) a
//! stage reached out to it.

mod embedder;
mod lookup;
mod retriever;
mod scorer;
mod scrubber;

pub use embedder::{HashEmbedder, ShortBatchEmbedder, WrongDimEmbedder, ZeroEmbedder};
pub use lookup::MapLookup;
pub use retriever::{FailingRetriever, StaticRetriever};
pub use scorer::{FailingScorer, ScriptedScorer, ShortScorer};
pub use scrubber::{FailingScrubber, RecordingScrubber};
