use serde::{Deserialize, Serialize};

use crate::identity::derive_id;

/// Half-open byte range `[start, end)` within the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Optional structural metadata attached by discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitMetadata {
    pub repository: Option<String>,
    pub service: Option<String>,
    pub file_path: Option<String>,
    pub symbol: Option<String>,
    /// Import edges (module paths this unit imports).
    pub imports: Vec<String>,
    /// Call edges (symbols this unit calls).
    pub calls: Vec<String>,
}

/// The fields every content unit carries, raw or certified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitParts {
    pub id: String,
    pub source_uri: String,
    pub byte_range: ByteRange,
    /// Registered source-type name. Tier and category come from the registry.
    pub source_type: String,
    pub text: String,
    /// Short disambiguating prefix prepended to the body for embedding.
    pub context_prefix: String,
    pub metadata: UnitMetadata,
    /// Source timestamp as discovery found it; parsed lazily by consumers.
    pub timestamp: Option<String>,
}

/// A content unit exactly as discovery produced it.
///
/// Immutable: fields are only readable. The embedding stage does not accept
/// this type; a unit must go through the safety gate first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawContentUnit {
    parts: UnitParts,
}

impl RawContentUnit {
    /// Create a unit. The id is derived from `(source_uri, byte_range)`.
    pub fn new(
        source_uri: impl Into<String>,
        byte_range: ByteRange,
        source_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let source_uri = source_uri.into();
        let id = derive_id(&source_uri, byte_range.start, byte_range.end);
        Self {
            parts: UnitParts {
                id,
                source_uri,
                byte_range,
                source_type: source_type.into(),
                text: text.into(),
                context_prefix: String::new(),
                metadata: UnitMetadata::default(),
                timestamp: None,
            },
        }
    }

    pub fn with_context_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.parts.context_prefix = prefix.into();
        self
    }

    pub fn with_metadata(mut self, metadata: UnitMetadata) -> Self {
        self.parts.metadata = metadata;
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.parts.timestamp = Some(timestamp.into());
        self
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

    /// Consume the unit. Only the safety gate turns these parts into
    /// something embeddable.
    pub fn into_parts(self) -> UnitParts {
        self.parts
    }
}
