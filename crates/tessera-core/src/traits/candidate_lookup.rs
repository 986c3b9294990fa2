use std::collections::HashMap;

use crate::errors::TesseraResult;
use crate::models::CandidateDocument;

/// Resolves fused unit ids to their display data.
pub trait ICandidateLookup: Send + Sync {
    /// Ids the store does not know are simply absent from the map.
    fn lookup(&self, unit_ids: &[String]) -> TesseraResult<HashMap<String, CandidateDocument>>;
}
