pub mod defaults;
mod embedding_config;
mod freshness_config;
mod intent_config;
mod observability_config;
mod privacy_config;
mod retrieval_config;

pub use embedding_config::EmbeddingConfig;
pub use freshness_config::FreshnessConfig;
pub use intent_config::{IntentConfig, IntentRuleConfig};
pub use observability_config::ObservabilityConfig;
pub use privacy_config::{PrivacyConfig, ScrubMode};
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TesseraResult};
use crate::source_types::{ChunkerKind, TokenizerKind};

/// An extra source type declared in `[[source_types]]`.
///
/// `tier` and `category` are validated when the registry is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTypeConfig {
    pub name: String,
    pub tier: String,
    pub category: String,
    pub chunker: ChunkerKind,
    pub tokenizer: TokenizerKind,
}

/// Top-level configuration. Every section defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseraConfig {
    pub privacy: PrivacyConfig,
    pub retrieval: RetrievalConfig,
    pub freshness: FreshnessConfig,
    pub intent: IntentConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
    pub source_types: Vec<SourceTypeConfig>,
}

impl TesseraConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> TesseraResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> TesseraResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Reject values no stage can work with.
    ///
    /// Source-type tiers and intent-rule categories are checked when the
    /// registry and rule table are built from this config.
    pub fn validate(&self) -> TesseraResult<()> {
        let half_life = self.freshness.half_life_days;
        if half_life.is_nan() || half_life <= 0.0 {
            return Err(invalid("freshness.half_life_days", "must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.freshness.weight) {
            return Err(invalid("freshness.weight", "must be within [0, 1]"));
        }
        if self.retrieval.candidate_pool == 0 {
            return Err(invalid("retrieval.candidate_pool", "must be > 0"));
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be > 0"));
        }
        if self.embedding.batch_size == 0 {
            return Err(invalid("embedding.batch_size", "must be > 0"));
        }
        if self.privacy.mode == ScrubMode::Pseudonymize && self.privacy.pseudonym_seed.is_none() {
            return Err(invalid(
                "privacy.pseudonym_seed",
                "required when mode = \"pseudonymize\"",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::TesseraError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
