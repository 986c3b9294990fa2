//! # tessera-core
//!
//! Foundation crate for Tessera.
//! Defines unit identity, the source-type registry, content and candidate
//! models, the traits every external collaborator implements, errors, and
//! configuration. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod identity;
pub mod models;
pub mod source_types;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TesseraConfig;
pub use errors::{TesseraError, TesseraResult};
pub use identity::derive_id;
pub use models::{
    ByteRange, CandidateDocument, QueryFilters, QueryRequest, RankedHit, RawContentUnit,
    SafetyAuditRecord, ScoredCandidate,
};
pub use source_types::{Category, SensitivityTier, SourceTypeDef, SourceTypeRegistry};
