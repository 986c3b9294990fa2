use serde::{Deserialize, Serialize};

use crate::source_types::SensitivityTier;

/// What the scrubber found in one unit.
///
/// Created exactly once for every unit that went through scrubbing. Never
/// created for a CLEAN unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyAuditRecord {
    pub unit_id: String,
    pub tier: SensitivityTier,
    /// Number of PII/PHI entities the scrubber reported.
    pub entities_found: usize,
    /// Distinct entity categories, sorted.
    pub entity_types: Vec<String>,
    pub secrets_found: usize,
    pub was_scrubbed: bool,
}
