use serde::{Deserialize, Serialize};

use super::defaults;

/// How the scrubber replaces what it finds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrubMode {
    /// Fixed category placeholders such as `[EMAIL]`.
    #[default]
    Redact,
    /// Seeded per-entity replacements such as `[PERSON_1f3a9c0d]`.
    Pseudonymize,
}

/// Privacy subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    pub mode: ScrubMode,
    /// Required when `mode = "pseudonymize"`.
    pub pseudonym_seed: Option<u64>,
    /// Enable context-aware confidence scoring.
    pub context_scoring: bool,
    /// JSONL audit log destination. `None` keeps records in memory.
    pub audit_log_path: Option<String>,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            mode: ScrubMode::default(),
            pseudonym_seed: None,
            context_scoring: defaults::DEFAULT_CONTEXT_SCORING,
            audit_log_path: None,
        }
    }
}
