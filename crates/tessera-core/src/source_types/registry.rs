use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::config::SourceTypeConfig;
use crate::errors::{ConfigError, TesseraResult};

use super::{Category, ChunkerKind, SensitivityTier, SourceTypeDef, TokenizerKind};

/// Immutable mapping from source-type name to its definition.
///
/// Validated once when built. Lookups never mutate it, so a single instance is
/// shared read-only across every worker thread.
#[derive(Debug, Clone)]
pub struct SourceTypeRegistry {
    types: BTreeMap<String, SourceTypeDef>,
}

impl SourceTypeRegistry {
    /// Registry with the source types Tessera ships with.
    pub fn builtin() -> Self {
        use Category as C;
        use ChunkerKind as K;
        use SensitivityTier as S;
        use TokenizerKind as T;

        let defs = [
            SourceTypeDef::new("code", S::MaybeSensitive, C::Code, K::Ast, T::Code),
            SourceTypeDef::new("api_spec", S::Clean, C::ApiSpec, K::Manifest, T::Code),
            SourceTypeDef::new("k8s_manifest", S::MaybeSensitive, C::Deploy, K::Manifest, T::Code),
            SourceTypeDef::new("terraform", S::MaybeSensitive, C::Infra, K::Manifest, T::Code),
            SourceTypeDef::new("runbook", S::MaybeSensitive, C::Runbook, K::Markdown, T::NaturalLanguage),
            SourceTypeDef::new("markdown_doc", S::Clean, C::Docs, K::Markdown, T::NaturalLanguage),
            SourceTypeDef::new("chat_message", S::Sensitive, C::Chat, K::ConversationTurns, T::NaturalLanguage),
            SourceTypeDef::new("meeting_transcript", S::Sensitive, C::Meeting, K::Transcript, T::NaturalLanguage),
        ];

        Self {
            types: defs.into_iter().map(|d| (d.name.clone(), d)).collect(),
        }
    }

    /// Build a registry from explicit definitions, rejecting duplicates and
    /// empty names.
    pub fn from_defs(defs: impl IntoIterator<Item = SourceTypeDef>) -> TesseraResult<Self> {
        let mut types = BTreeMap::new();
        for def in defs {
            Self::insert_checked(&mut types, def)?;
        }
        Ok(Self { types })
    }

    /// The builtin registry extended with configured source types.
    ///
    /// Tier and category strings are parsed here, so an unknown tier surfaces
    /// at startup rather than when the first unit reaches the gate.
    pub fn with_configured(extra: &[SourceTypeConfig]) -> TesseraResult<Self> {
        let mut registry = Self::builtin();
        for cfg in extra {
            let def = SourceTypeDef {
                name: cfg.name.clone(),
                tier: cfg.tier.parse()?,
                category: cfg.category.parse()?,
                chunker: cfg.chunker,
                tokenizer: cfg.tokenizer,
            };
            Self::insert_checked(&mut registry.types, def)?;
        }
        Ok(registry)
    }

    fn insert_checked(
        types: &mut BTreeMap<String, SourceTypeDef>,
        def: SourceTypeDef,
    ) -> TesseraResult<()> {
        if def.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "source_types.name".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if types.contains_key(&def.name) {
            return Err(ConfigError::DuplicateSourceType { name: def.name }.into());
        }
        types.insert(def.name.clone(), def);
        Ok(())
    }

    /// Look up a source type. An unregistered name is a configuration error.
    pub fn get(&self, name: &str) -> TesseraResult<&SourceTypeDef> {
        self.types.get(name).ok_or_else(|| {
            ConfigError::UnregisteredSourceType {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn tier_of(&self, name: &str) -> TesseraResult<SensitivityTier> {
        self.get(name).map(|d| d.tier)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceTypeDef> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for SourceTypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

static GLOBAL: OnceLock<Arc<SourceTypeRegistry>> = OnceLock::new();

/// Install the process-wide registry. Call once at startup, before any gate
/// reads it; a second call fails.
pub fn install(registry: SourceTypeRegistry) -> TesseraResult<()> {
    GLOBAL
        .set(Arc::new(registry))
        .map_err(|_| ConfigError::RegistryAlreadyInstalled.into())
}

/// The process-wide registry. Falls back to [`SourceTypeRegistry::builtin`]
/// when nothing was installed.
pub fn global() -> Arc<SourceTypeRegistry> {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(SourceTypeRegistry::builtin())))
}
