//! Source-type classification.
//!
//! Every content unit names a source type. The source type, not the unit,
//! carries the sensitivity tier, the content category, and the chunker and
//! tokenizer kinds discovery must use for it.

mod registry;

pub use registry::{global, install, SourceTypeRegistry};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TesseraError};

/// Fixed sensitivity classification of a source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensitivityTier {
    /// Safe to embed as-is. The scrubber is never invoked.
    Clean,
    /// May contain secrets or PII (code, manifests, runbooks).
    MaybeSensitive,
    /// Expected to contain PII/PHI (chat, meeting transcripts).
    Sensitive,
}

impl SensitivityTier {
    pub fn requires_scrubbing(self) -> bool {
        !matches!(self, Self::Clean)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "CLEAN",
            Self::MaybeSensitive => "MAYBE_SENSITIVE",
            Self::Sensitive => "SENSITIVE",
        }
    }
}

impl fmt::Display for SensitivityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensitivityTier {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clean" => Ok(Self::Clean),
            "maybe_sensitive" => Ok(Self::MaybeSensitive),
            "sensitive" => Ok(Self::Sensitive),
            _ => Err(ConfigError::UnknownSensitivityTier {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

/// Content category used by the boosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Code,
    ApiSpec,
    Infra,
    Deploy,
    Runbook,
    Docs,
    Chat,
    Meeting,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Code,
        Self::ApiSpec,
        Self::Infra,
        Self::Deploy,
        Self::Runbook,
        Self::Docs,
        Self::Chat,
        Self::Meeting,
    ];

    /// Conversational content is the only kind the freshness booster touches.
    pub fn is_conversational(self) -> bool {
        matches!(self, Self::Chat | Self::Meeting)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::ApiSpec => "api_spec",
            Self::Infra => "infra",
            Self::Deploy => "deploy",
            Self::Runbook => "runbook",
            Self::Docs => "docs",
            Self::Chat => "chat",
            Self::Meeting => "meeting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TesseraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                ConfigError::UnknownCategory {
                    value: s.to_string(),
                }
                .into()
            })
    }
}

/// How discovery splits a source into units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkerKind {
    /// Syntax-aware splitting on function/class boundaries.
    Ast,
    /// One unit per manifest document or resource block.
    Manifest,
    /// Heading-delimited sections.
    Markdown,
    /// Windows of consecutive chat turns.
    ConversationTurns,
    /// Speaker-segmented transcript windows.
    Transcript,
}

/// Which lexical index variant the unit is tokenized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Identifier-aware: splits camelCase/snake_case, keeps punctuation tokens.
    Code,
    /// Stemmed natural-language tokens.
    NaturalLanguage,
}

/// A registered source type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTypeDef {
    pub name: String,
    pub tier: SensitivityTier,
    pub category: Category,
    pub chunker: ChunkerKind,
    pub tokenizer: TokenizerKind,
}

impl SourceTypeDef {
    pub fn new(
        name: impl Into<String>,
        tier: SensitivityTier,
        category: Category,
        chunker: ChunkerKind,
        tokenizer: TokenizerKind,
    ) -> Self {
        Self {
            name: name.into(),
            tier,
            category,
            chunker,
            tokenizer,
        }
    }
}
