mod audit;
mod candidate;
mod content_unit;
mod query;

pub use audit::SafetyAuditRecord;
pub use candidate::{
    sort_best_first, CandidateDocument, Provenance, RankedHit, ScoredCandidate, StageHit,
};
pub use content_unit::{ByteRange, RawContentUnit, UnitMetadata, UnitParts};
pub use query::{FreshnessParams, QueryFilters, QueryRequest};
