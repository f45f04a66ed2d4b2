//! Error types for runtime auth-scheme resolution.

use sdkgen_auth_scheme::AuthSchemeError;

/// Errors that can occur while resolving or selecting an auth scheme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthSelectionError {
    /// Every candidate option was discarded.
    #[error("Failed to select an auth scheme to sign the request. Discarded options: {}", reasons.join(" "))]
    NoUsableScheme {
        /// One message per discarded option, in option order.
        reasons: Vec<String>,
    },

    /// A registered auth scheme could not produce its signer.
    #[error("{0}")]
    SignerUnavailable(String),

    /// The knowledge index could not be built for the model.
    #[error(transparent)]
    Index(#[from] AuthSchemeError),
}

/// Convenience alias for auth selection results.
pub type AuthSelectionResult<T> = Result<T, AuthSelectionError>;
