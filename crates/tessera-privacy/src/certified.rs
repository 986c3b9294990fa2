use serde::Serialize;

use tessera_core::models::{ByteRange, UnitMetadata, UnitParts};
use tessera_core::{Category, SafetyAuditRecord, SensitivityTier};

/// A content unit proven safe to embed and index.
///
/// Only [`SafetyGate::certify`](crate::SafetyGate::certify) constructs one.
/// There is no public constructor and no `Deserialize`, so raw text cannot be
/// relabeled as certified anywhere outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertifiedContentUnit {
    parts: UnitParts,
    tier: SensitivityTier,
    category: Category,
    audit: Option<SafetyAuditRecord>,
}

impl CertifiedContentUnit {
    pub(crate) fn new(
        parts: UnitParts,
        tier: SensitivityTier,
        category: Category,
        audit: Option<SafetyAuditRecord>,
    ) -> Self {
        Self {
            parts,
            tier,
            category,
            audit,
        }
    }

    pub fn id(&self) -> &str {
        &self.parts.id
    }

    pub fn source_uri(&self) -> &str {
        &self.parts.source_uri
    }

    pub fn byte_range(&self) -> ByteRange {
        self.parts.byte_range
    }

    pub fn source_type(&self) -> &str {
        &self.parts.source_type
    }

    /// Scrubbed text for non-CLEAN tiers, the original bytes for CLEAN.
    pub fn text(&self) -> &str {
        &self.parts.text
    }

    pub fn context_prefix(&self) -> &str {
        &self.parts.context_prefix
    }

    pub fn metadata(&self) -> &UnitMetadata {
        &self.parts.metadata
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.parts.timestamp.as_deref()
    }

    pub fn tier(&self) -> SensitivityTier {
        self.tier
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Present exactly when the unit was scrubbed.
    pub fn audit(&self) -> Option<&SafetyAuditRecord> {
        self.audit.as_ref()
    }

    /// The text handed to the embedding model: context prefix, blank line, body.
    pub fn embedding_input(&self) -> String {
        if self.parts.context_prefix.is_empty() {
            self.parts.text.clone()
        } else {
            format!("{}\n\n{}", self.parts.context_prefix, self.parts.text)
        }
    }
}
