use std::collections::BTreeSet;
use std::sync::Arc;

use rayon::prelude::*;

use tessera_core::errors::{PrivacyError, TesseraError, TesseraResult};
use tessera_core::source_types;
use tessera_core::traits::{IAuditSink, IScrubber, ScrubContext};
use tessera_core::{RawContentUnit, SafetyAuditRecord, SensitivityTier, SourceTypeRegistry, TesseraConfig};
use tessera_observability::events;

use crate::audit_log;
use crate::certified::CertifiedContentUnit;
use crate::scrubber::PatternScrubber;

/// The only path from a [`RawContentUnit`] to a [`CertifiedContentUnit`].
///
/// CLEAN source types pass through byte-identical with no audit record.
/// Every other tier is scrubbed exactly once and audited. Any scrubber or
/// audit failure rejects the unit; nothing partially scrubbed escapes.
pub struct SafetyGate {
    registry: Arc<SourceTypeRegistry>,
    scrubber: Arc<dyn IScrubber>,
    audit: Arc<dyn IAuditSink>,
}

impl SafetyGate {
    pub fn new(
        registry: Arc<SourceTypeRegistry>,
        scrubber: Arc<dyn IScrubber>,
        audit: Arc<dyn IAuditSink>,
    ) -> Self {
        Self {
            registry,
            scrubber,
            audit,
        }
    }

    /// Gate backed by the process-wide registry.
    pub fn with_global_registry(scrubber: Arc<dyn IScrubber>, audit: Arc<dyn IAuditSink>) -> Self {
        Self::new(source_types::global(), scrubber, audit)
    }

    /// Gate assembled from configuration: the builtin registry extended with
    /// `[[source_types]]`, a [`PatternScrubber`] for `[privacy]`, and the
    /// audit sink named by `audit_log_path`.
    pub fn from_config(config: &TesseraConfig) -> TesseraResult<Self> {
        let registry = SourceTypeRegistry::with_configured(&config.source_types)?;
        let scrubber = PatternScrubber::from_config(&config.privacy)?;
        let audit = audit_log::open_sink(&config.privacy)?;
        Ok(Self::new(Arc::new(registry), Arc::new(scrubber), audit))
    }

    pub fn registry(&self) -> &SourceTypeRegistry {
        &self.registry
    }

    /// Certify one unit.
    pub fn certify(&self, unit: RawContentUnit) -> TesseraResult<CertifiedContentUnit> {
        let def = self.registry.get(unit.source_type())?;
        let (tier, category) = (def.tier, def.category);

        if !tier.requires_scrubbing() {
            return Ok(CertifiedContentUnit::new(unit.into_parts(), tier, category, None));
        }

        let ctx = ScrubContext {
            unit_id: unit.id(),
            source_uri: unit.source_uri(),
            source_type: unit.source_type(),
            tier,
            file_path: unit.metadata().file_path.as_deref(),
        };

        let outcome = match self.scrubber.scrub(unit.text(), &ctx) {
            Ok(outcome) => outcome,
            Err(err) => {
                events::scrubber_failed(unit.id(), tier.as_str(), &err.to_string());
                return Err(reject(unit.id(), err));
            }
        };

        let entity_types: BTreeSet<String> = outcome.entity_types.into_iter().collect();
        let record = SafetyAuditRecord {
            unit_id: unit.id().to_string(),
            tier,
            entities_found: outcome.entities_found,
            entity_types: entity_types.into_iter().collect(),
            secrets_found: outcome.secrets_found,
            was_scrubbed: true,
        };

        self.audit.append(&record).map_err(|e| PrivacyError::AuditWriteFailed {
            unit_id: record.unit_id.clone(),
            reason: e.to_string(),
        })?;

        match tier {
            SensitivityTier::Sensitive => {
                events::sensitive_unit_scrubbed(&record.unit_id, record.entities_found, record.secrets_found)
            }
            _ => events::maybe_sensitive_unit_scrubbed(
                &record.unit_id,
                record.entities_found,
                record.secrets_found,
            ),
        }

        let mut parts = unit.into_parts();
        parts.text = outcome.redacted_text;
        Ok(CertifiedContentUnit::new(parts, tier, category, Some(record)))
    }

    /// Certify units in parallel. Output order matches input order; the first
    /// failure aborts the batch.
    pub fn certify_batch(&self, units: Vec<RawContentUnit>) -> TesseraResult<Vec<CertifiedContentUnit>> {
        let total = units.len();
        let certified: Vec<CertifiedContentUnit> = units
            .into_par_iter()
            .map(|unit| self.certify(unit))
            .collect::<TesseraResult<_>>()?;
        let scrubbed = certified.iter().filter(|u| u.audit().is_some()).count();
        events::batch_certified(total, scrubbed);
        Ok(certified)
    }
}

/// Scrubber errors become `ScrubberFailed`, except degraded patterns which
/// keep their own variant.
fn reject(unit_id: &str, err: TesseraError) -> TesseraError {
    match err {
        TesseraError::Privacy(PrivacyError::ScrubberDegraded { .. }) => err,
        other => PrivacyError::ScrubberFailed {
            unit_id: unit_id.to_string(),
            reason: other.to_string(),
        }
        .into(),
    }
}
