//! Error types for auth-scheme resolution.
//!
//! Every variant describes an internally inconsistent model or registry. None
//! of them is recoverable: code generation must stop rather than emit a client
//! with the wrong signing behavior.

/// Configuration-integrity errors raised while building the knowledge indices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthSchemeError {
    /// An operation declares auth types on a service whose auth is fully
    /// driven by a service-wide signer override.
    #[error("Operation {operation} has auth trait and requires special handling")]
    OperationAuthOverride {
        /// The offending operation.
        operation: String,
    },

    /// No SigV4 signer defaults are registered for this auth type.
    #[error("unknown auth type: {0}")]
    UnknownAuthType(String),

    /// The auth type is known but has no auth-scheme mapping.
    #[error("auth type {0} cannot be mapped to an auth scheme")]
    UnsupportedAuthType(String),

    /// A scheme id that is missing from the scheme table.
    #[error("unknown auth scheme id: {0}")]
    UnknownSchemeId(String),

    /// A signer defaults node without one of its required fields.
    #[error("signer defaults for {auth_type:?} are missing required field {field}")]
    MissingField {
        /// Auth type of the node (may be empty when that is the missing field).
        auth_type: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Two registry entries share the same auth type.
    #[error("duplicate signer defaults for auth type {0}")]
    DuplicateAuthType(String),

    /// A per-operation override node declares a service name.
    #[error("operation override {operation} of auth type {auth_type} must not declare a service")]
    NestedServiceOverride {
        /// Auth type of the root node.
        auth_type: String,
        /// Operation the nested node is keyed by.
        operation: String,
    },
}

/// Convenience result type for auth-scheme resolution.
pub type AuthSchemeResult<T> = Result<T, AuthSchemeError>;
