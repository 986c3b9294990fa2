/// Safety-gate errors. Any of these means the unit was not certified.
#[derive(Debug, thiserror::Error)]
pub enum PrivacyError {
    #[error("scrubber failed for unit {unit_id}: {reason}")]
    ScrubberFailed { unit_id: String, reason: String },

    #[error("scrubber degraded: {failed_patterns} pattern(s) unavailable")]
    ScrubberDegraded { failed_patterns: usize },

    #[error("audit write failed for unit {unit_id}: {reason}")]
    AuditWriteFailed { unit_id: String, reason: String },
}

impl PrivacyError {
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::ScrubberFailed { .. } | Self::ScrubberDegraded { .. })
    }
}
