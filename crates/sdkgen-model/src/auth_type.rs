//! Auth type values declared on services and operations.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// An authentication type declared in the service model.
///
/// Values come either from the legacy `signatureVersion`-style names
/// (`v4`, `s3`, `s3v4`, ...) or from Smithy auth trait ids
/// (`aws.auth#sigv4`, `smithy.api#noAuth`, ...). Both spellings parse to the
/// same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AuthType {
    /// No authentication.
    None,
    /// Service-specific custom signer.
    Custom,
    /// Legacy IAM auth.
    Iam,
    /// AWS Signature Version 4.
    #[default]
    V4,
    /// SigV4 without payload signing.
    V4UnsignedBody,
    /// SigV4 with the S3 signing quirks.
    S3,
    /// SigV4 with the S3 path handling, payload signed.
    S3V4,
    /// Bearer token auth.
    Bearer,
    /// AWS Signature Version 4a (multi-region).
    V4a,
}

impl AuthType {
    /// All known auth types.
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::Custom,
        Self::Iam,
        Self::V4,
        Self::V4UnsignedBody,
        Self::S3,
        Self::S3V4,
        Self::Bearer,
        Self::V4a,
    ];

    /// Returns the legacy name of this auth type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Custom => "custom",
            Self::Iam => "iam",
            Self::V4 => "v4",
            Self::V4UnsignedBody => "v4-unsigned-body",
            Self::S3 => "s3",
            Self::S3V4 => "s3v4",
            Self::Bearer => "bearer",
            Self::V4a => "v4a",
        }
    }

    /// Parse either a legacy name or a Smithy auth trait id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownAuthType`] for anything else.
    pub fn from_value(value: &str) -> Result<Self, ModelError> {
        let auth_type = match value {
            "smithy.api#noAuth" => Self::None,
            "aws.auth#sigv4" => Self::V4,
            "aws.auth#sigv4a" => Self::V4a,
            "smithy.api#httpBearerAuth" => Self::Bearer,
            other => Self::ALL
                .into_iter()
                .find(|t| t.as_str() == other)
                .ok_or_else(|| ModelError::UnknownAuthType(other.to_owned()))?,
        };
        Ok(auth_type)
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl TryFrom<String> for AuthType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl From<AuthType> for &'static str {
    fn from(value: AuthType) -> Self {
        value.as_str()
    }
}
