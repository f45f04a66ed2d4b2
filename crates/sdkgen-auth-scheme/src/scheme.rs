//! Well-known auth scheme ids and the types generated code refers to.
//!
//! The scheme table is the single source of truth for which auth-scheme type
//! and signer type belong to a scheme id. Callers look schemes up by id rather
//! than spelling type paths at each use site.

use std::fmt;

use serde::Serialize;

use crate::error::{AuthSchemeError, AuthSchemeResult};

/// Scheme id of AWS Signature Version 4.
pub const SIGV4_SCHEME_ID: &str = "aws.auth#sigv4";
/// Scheme id of AWS Signature Version 4a.
pub const SIGV4A_SCHEME_ID: &str = "aws.auth#sigv4a";
/// Scheme id of HTTP bearer auth.
pub const BEARER_SCHEME_ID: &str = "smithy.api#httpBearerAuth";
/// Scheme id of anonymous requests.
pub const NO_AUTH_SCHEME_ID: &str = "smithy.api#noAuth";

/// Path of a runtime type referenced from generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypePath {
    /// Module the type lives in.
    pub module: &'static str,
    /// Simple (unqualified) type name.
    pub name: &'static str,
}

impl TypePath {
    /// Create a new type path.
    #[must_use]
    pub const fn new(module: &'static str, name: &'static str) -> Self {
        Self { module, name }
    }

    /// The unqualified type name.
    #[must_use]
    pub fn simple_name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}

/// Signer that owns the properties shared by SigV4 and SigV4a.
pub const AWS_V4_FAMILY_HTTP_SIGNER: TypePath =
    TypePath::new("http_auth_aws::signer", "AwsV4FamilyHttpSigner");
/// SigV4 signer.
pub const AWS_V4_HTTP_SIGNER: TypePath = TypePath::new("http_auth_aws::signer", "AwsV4HttpSigner");
/// SigV4a signer.
pub const AWS_V4A_HTTP_SIGNER: TypePath =
    TypePath::new("http_auth_aws::signer", "AwsV4aHttpSigner");

/// SigV4 auth scheme.
pub const AWS_V4_AUTH_SCHEME: TypePath = TypePath::new("http_auth_aws::scheme", "AwsV4AuthScheme");
/// SigV4a auth scheme.
pub const AWS_V4A_AUTH_SCHEME: TypePath =
    TypePath::new("http_auth_aws::scheme", "AwsV4aAuthScheme");
/// Bearer auth scheme.
pub const BEARER_AUTH_SCHEME: TypePath = TypePath::new("http_auth::scheme", "BearerAuthScheme");
/// Anonymous auth scheme.
pub const NO_AUTH_AUTH_SCHEME: TypePath = TypePath::new("http_auth::scheme", "NoAuthAuthScheme");

/// One row of the scheme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeDescriptor {
    /// Scheme id as it appears in auth-scheme options.
    pub scheme_id: &'static str,
    /// Concrete auth-scheme type.
    pub auth_scheme: TypePath,
    /// Signer type, if the scheme signs requests.
    pub signer: Option<TypePath>,
    /// Whether the signer understands the SigV4 family signer properties.
    pub sigv4_family: bool,
}

const SCHEMES: &[SchemeDescriptor] = &[
    SchemeDescriptor {
        scheme_id: SIGV4_SCHEME_ID,
        auth_scheme: AWS_V4_AUTH_SCHEME,
        signer: Some(AWS_V4_HTTP_SIGNER),
        sigv4_family: true,
    },
    SchemeDescriptor {
        scheme_id: SIGV4A_SCHEME_ID,
        auth_scheme: AWS_V4A_AUTH_SCHEME,
        signer: Some(AWS_V4A_HTTP_SIGNER),
        sigv4_family: true,
    },
    SchemeDescriptor {
        scheme_id: BEARER_SCHEME_ID,
        auth_scheme: BEARER_AUTH_SCHEME,
        signer: Some(TypePath::new("http_auth::signer", "BearerHttpSigner")),
        sigv4_family: false,
    },
    SchemeDescriptor {
        scheme_id: NO_AUTH_SCHEME_ID,
        auth_scheme: NO_AUTH_AUTH_SCHEME,
        signer: None,
        sigv4_family: false,
    },
];

/// All registered schemes, in table order.
#[must_use]
pub fn schemes() -> &'static [SchemeDescriptor] {
    SCHEMES
}

/// Look up a scheme by id.
#[must_use]
pub fn scheme_descriptor(scheme_id: &str) -> Option<&'static SchemeDescriptor> {
    SCHEMES.iter().find(|s| s.scheme_id == scheme_id)
}

/// Look up a scheme by id, failing for ids outside the table.
///
/// # Errors
///
/// Returns [`AuthSchemeError::UnknownSchemeId`] if the id is not registered.
pub fn require_scheme(scheme_id: &str) -> AuthSchemeResult<&'static SchemeDescriptor> {
    scheme_descriptor(scheme_id).ok_or_else(|| AuthSchemeError::UnknownSchemeId(scheme_id.to_owned()))
}
