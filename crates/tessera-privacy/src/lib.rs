//! # tessera-privacy
//!
//! The content-safety gate. A [`RawContentUnit`](tessera_core::RawContentUnit)
//! becomes a [`CertifiedContentUnit`] only through [`SafetyGate::certify`]:
//! CLEAN source types pass through untouched, every other tier is scrubbed
//! and audited, and any scrubber failure rejects the unit.
//!
//! [`PatternScrubber`] is the regex-based `IScrubber` shipped with Tessera:
//! PII/PHI and secret patterns, context-aware scoring, optional seeded
//! pseudonymization.

pub mod audit_log;
pub mod certified;
pub mod context_scoring;
pub mod degradation;
pub mod gate;
pub mod patterns;
pub mod pseudonymizer;
pub mod scrubber;

pub use audit_log::{InMemoryAuditLog, JsonlAuditLog};
pub use certified::CertifiedContentUnit;
pub use gate::SafetyGate;
pub use pseudonymizer::Pseudonymizer;
pub use scrubber::PatternScrubber;
