mod config_error;
mod embedding_error;
mod privacy_error;
mod retrieval_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use privacy_error::PrivacyError;
pub use retrieval_error::RetrievalError;

/// Top-level error for every Tessera operation.
///
/// Configuration failures are fatal for startup or the current request.
/// Upstream failures (scrubber, retrievers, scorer, embedding provider) are
/// surfaced to the caller and never partially applied. Data-quality problems
/// such as malformed timestamps are recovered where they occur and never
/// become an error value.
#[derive(Debug, thiserror::Error)]
pub enum TesseraError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("privacy error: {0}")]
    Privacy(#[from] PrivacyError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TesseraError {
    /// Whether this error came from misconfiguration (unknown tier, unregistered
    /// source type or category, invalid rule table).
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Whether this error came from an external collaborator call.
    pub fn is_upstream(&self) -> bool {
        match self {
            Self::Privacy(e) => e.is_upstream(),
            Self::Retrieval(e) => e.is_upstream(),
            Self::Embedding(e) => e.is_upstream(),
            _ => false,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type TesseraResult<T> = Result<T, TesseraError>;
