//! Pattern health for the scrubber.
//!
//! A pattern that failed to compile would silently let its entity type
//! through. The scrubber records such gaps here and refuses to scrub while
//! any exist, so the gate fails closed instead of certifying partially
//! scrubbed text.

use crate::patterns;

/// Record of a pattern that failed to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub pattern_name: String,
    pub entity_type: String,
}

/// Accumulates pattern failures.
#[derive(Debug, Default)]
pub struct DegradationTracker {
    failures: Vec<PatternFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every pattern in the catalogue.
    pub fn check_patterns() -> Self {
        let mut tracker = Self::new();
        for pat in patterns::all_patterns() {
            if pat.regex.is_none() {
                tracker.record_failure(pat.name, pat.entity_type);
            }
        }
        tracker
    }

    pub fn record_failure(&mut self, pattern_name: &str, entity_type: &str) {
        self.failures.push(PatternFailure {
            pattern_name: pattern_name.to_string(),
            entity_type: entity_type.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}
