//! # tessera-embeddings
//!
//! Turns [`CertifiedContentUnit`](tessera_privacy::CertifiedContentUnit)s into
//! [`EmbeddedUnit`]s. The stage only accepts certified units, so raw text can
//! never reach the embedding provider.

pub mod engine;
pub mod vectors;

pub use engine::{EmbeddedUnit, EmbeddingStage};
