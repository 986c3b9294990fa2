use std::collections::BTreeSet;

use tessera_core::config::{PrivacyConfig, ScrubMode};
use tessera_core::errors::{ConfigError, PrivacyError, TesseraResult};
use tessera_core::traits::{IScrubber, ScrubContext, ScrubOutcome};
use tessera_core::SensitivityTier;

use crate::context_scoring::{adjust_confidence, is_in_comment, looks_like_placeholder, ScoringContext};
use crate::degradation::DegradationTracker;
use crate::patterns::{self, RawMatch};
use crate::pseudonymizer::Pseudonymizer;

/// Regex-based scrubber for PII, PHI and secrets.
///
/// Implements `IScrubber`. Deterministic for a given configuration, and
/// idempotent: scrubbing its own output finds nothing new.
pub struct PatternScrubber {
    pseudonymizer: Option<Pseudonymizer>,
    context_scoring: bool,
}

impl std::fmt::Debug for PatternScrubber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternScrubber")
            .field("pseudonymize", &self.pseudonymizer.is_some())
            .field("context_scoring", &self.context_scoring)
            .finish_non_exhaustive()
    }
}

impl PatternScrubber {
    /// Scrubber that replaces findings with `[ENTITY_TYPE]` placeholders.
    pub fn new() -> Self {
        Self {
            pseudonymizer: None,
            context_scoring: true,
        }
    }

    /// Scrubber that replaces findings with seeded per-entity pseudonyms.
    pub fn pseudonymizing(seed: u64) -> Self {
        Self {
            pseudonymizer: Some(Pseudonymizer::new(seed)),
            context_scoring: true,
        }
    }

    pub fn from_config(config: &PrivacyConfig) -> TesseraResult<Self> {
        let mut scrubber = match config.mode {
            ScrubMode::Redact => Self::new(),
            ScrubMode::Pseudonymize => {
                let Some(seed) = config.pseudonym_seed else {
                    return Err(ConfigError::InvalidValue {
                        field: "privacy.pseudonym_seed".to_string(),
                        reason: "required when mode = \"pseudonymize\"".to_string(),
                    }
                    .into());
                };
                Self::pseudonymizing(seed)
            }
        };
        scrubber.context_scoring = config.context_scoring;
        Ok(scrubber)
    }

    pub fn with_context_scoring(mut self, enabled: bool) -> Self {
        self.context_scoring = enabled;
        self
    }

    /// Matches that survive context scoring, sorted by start descending.
    ///
    /// SENSITIVE text is never down-weighted: only placeholders are skipped.
    fn kept_matches(&self, text: &str, ctx: &ScrubContext<'_>) -> Vec<RawMatch> {
        let scoring = self.context_scoring && ctx.tier != SensitivityTier::Sensitive;
        let file_path = ctx.file_path;
        patterns::scan_all(text)
            .into_iter()
            .filter(|m| {
                let matched = &text[m.start..m.end];
                if !scoring {
                    return !looks_like_placeholder(matched);
                }
                let ctx = ScoringContext {
                    file_path,
                    in_comment: is_in_comment(text, m.start),
                    is_placeholder: looks_like_placeholder(matched),
                };
                adjust_confidence(m.base_confidence, &ctx).is_some()
            })
            .collect()
    }

    fn replacement(&self, m: &RawMatch, matched: &str) -> String {
        match &self.pseudonymizer {
            Some(p) => p.pseudonym(m.entity_type, matched),
            None => format!("[{}]", m.entity_type),
        }
    }
}

impl Default for PatternScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl IScrubber for PatternScrubber {
    fn scrub(&self, text: &str, ctx: &ScrubContext<'_>) -> TesseraResult<ScrubOutcome> {
        let tracker = DegradationTracker::check_patterns();
        if tracker.has_failures() {
            return Err(PrivacyError::ScrubberDegraded {
                failed_patterns: tracker.failure_count(),
            }
            .into());
        }

        let kept = self.kept_matches(text, ctx);

        let mut entities_found = 0;
        let mut secrets_found = 0;
        let mut entity_types = BTreeSet::new();
        let mut redacted = text.to_string();

        // Descending start order: each replacement leaves earlier offsets valid.
        for m in &kept {
            let replacement = self.replacement(m, &text[m.start..m.end]);
            redacted.replace_range(m.start..m.end, &replacement);
            if m.kind.is_secret() {
                secrets_found += 1;
            } else {
                entities_found += 1;
                entity_types.insert(m.entity_type.to_string());
            }
        }

        Ok(ScrubOutcome {
            redacted_text: redacted,
            entities_found,
            entity_types: entity_types.into_iter().collect(),
            secrets_found,
        })
    }
}
