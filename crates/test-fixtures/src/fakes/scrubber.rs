use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tessera_core::errors::{EmbeddingError, TesseraResult};
use tessera_core::traits::{IScrubber, ScrubContext, ScrubOutcome};
use tessera_core::SensitivityTier;

/// Replaces every occurrence of one needle and counts each as an entity.
pub struct RecordingScrubber {
    needle: String,
    entity_type: String,
    calls: AtomicUsize,
    tiers: Mutex<Vec<SensitivityTier>>,
}

impl RecordingScrubber {
    pub fn replacing(needle: &str, entity_type: &str) -> Self {
        Self {
            needle: needle.to_string(),
            entity_type: entity_type.to_string(),
            calls: AtomicUsize::new(0),
            tiers: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Tier of every scrubbed text, in call order.
    pub fn tiers(&self) -> Vec<SensitivityTier> {
        self.tiers.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl IScrubber for RecordingScrubber {
    fn scrub(&self, text: &str, ctx: &ScrubContext<'_>) -> TesseraResult<ScrubOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tiers
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(ctx.tier);
        let found = if self.needle.is_empty() {
            0
        } else {
            text.matches(self.needle.as_str()).count()
        };
        let entity_types = if found > 0 {
            vec![self.entity_type.clone()]
        } else {
            Vec::new()
        };
        Ok(ScrubOutcome {
            redacted_text: text.replace(self.needle.as_str(), &format!("[{}]", self.entity_type)),
            entities_found: found,
            entity_types,
            secrets_found: 0,
        })
    }
}

/// Always fails, as an unreachable scrubbing model would.
#[derive(Default)]
pub struct FailingScrubber {
    calls: AtomicUsize,
}

impl FailingScrubber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IScrubber for FailingScrubber {
    fn scrub(&self, _text: &str, _ctx: &ScrubContext<'_>) -> TesseraResult<ScrubOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EmbeddingError::InferenceFailed {
            reason: "ner model unavailable".to_string(),
        }
        .into())
    }
}
