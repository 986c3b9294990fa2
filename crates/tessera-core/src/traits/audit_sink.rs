use crate::errors::TesseraResult;
use crate::models::SafetyAuditRecord;

/// Append-only destination for safety audit records. Safe for concurrent
/// writers.
pub trait IAuditSink: Send + Sync {
    fn append(&self, record: &SafetyAuditRecord) -> TesseraResult<()>;
}
