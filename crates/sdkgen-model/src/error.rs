//! Error types for loading the intermediate model.

/// Errors raised while loading or validating an intermediate model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// An auth type value that is neither a legacy name nor a known trait id.
    #[error("unknown auth type: {0}")]
    UnknownAuthType(String),

    /// The model document could not be deserialized.
    #[error("malformed intermediate model: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The model deserialized but violates a structural rule.
    #[error("invalid intermediate model: {0}")]
    Invalid(String),
}

/// Convenience result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
