use serde::{Deserialize, Serialize};

use crate::errors::TesseraResult;
use crate::source_types::SensitivityTier;

/// What the scrubber knows about the text it is scrubbing.
#[derive(Debug, Clone, Copy)]
pub struct ScrubContext<'a> {
    pub unit_id: &'a str,
    pub source_uri: &'a str,
    pub source_type: &'a str,
    pub tier: SensitivityTier,
    pub file_path: Option<&'a str>,
}

/// Result of scrubbing one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrubOutcome {
    pub redacted_text: String,
    /// PII/PHI entities replaced.
    pub entities_found: usize,
    /// Distinct entity categories, sorted.
    pub entity_types: Vec<String>,
    /// Secrets (keys, tokens, credentials) replaced.
    pub secrets_found: usize,
}

/// PHI/PII/secret scrubbing.
///
/// Must be deterministic for identical input and configuration. Seeded
/// pseudonymization must map the same `(entity_text, entity_type)` to the
/// same replacement for the lifetime of the process.
pub trait IScrubber: Send + Sync {
    fn scrub(&self, text: &str, ctx: &ScrubContext<'_>) -> TesseraResult<ScrubOutcome>;
}
