/// Configuration errors. Always fatal: never silently defaulted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown sensitivity tier: {value}")]
    UnknownSensitivityTier { value: String },

    #[error("unregistered source type: {name}")]
    UnregisteredSourceType { name: String },

    #[error("duplicate source type: {name}")]
    DuplicateSourceType { name: String },

    #[error("unknown category: {value}")]
    UnknownCategory { value: String },

    #[error("invalid intent rule #{index}: {reason}")]
    InvalidIntentRule { index: usize, reason: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("source-type registry already installed")]
    RegistryAlreadyInstalled,
}
