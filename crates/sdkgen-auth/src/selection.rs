//! Choosing the auth scheme that signs a request.
//!
//! Options are tried in order; the first whose scheme is registered on the
//! client, has a configured identity, and can produce its signer wins.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use sdkgen_auth_scheme::scheme::{
    BEARER_SCHEME_ID, NO_AUTH_SCHEME_ID, SchemeDescriptor, TypePath, schemes,
};
use tracing::{debug, warn};

use crate::error::{AuthSelectionError, AuthSelectionResult};
use crate::option::AuthSchemeOption;

/// Kind of identity an auth scheme signs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    /// AWS access key credentials.
    AwsCredentials,
    /// Bearer token.
    Token,
    /// No identity.
    Anonymous,
}

/// Identity kinds a client has providers for. Anonymous is always available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProviders {
    kinds: HashSet<IdentityKind>,
}

impl Default for IdentityProviders {
    fn default() -> Self {
        Self {
            kinds: HashSet::from([IdentityKind::Anonymous]),
        }
    }
}

impl IdentityProviders {
    /// Providers for the anonymous identity only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive providers with one more identity kind.
    #[must_use]
    pub fn with(mut self, kind: IdentityKind) -> Self {
        self.kinds.insert(kind);
        self
    }

    /// Whether a provider for `kind` is configured.
    #[must_use]
    pub fn contains(&self, kind: IdentityKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// An auth scheme registered on a client.
pub trait AuthScheme: fmt::Debug + Send + Sync {
    /// Scheme id this scheme implements.
    fn scheme_id(&self) -> &str;

    /// Identity the scheme signs with.
    fn identity_kind(&self) -> IdentityKind;

    /// Signer type; `None` for schemes that send requests unsigned.
    ///
    /// # Errors
    ///
    /// Returns [`AuthSelectionError::SignerUnavailable`] when the signer
    /// cannot be created.
    fn signer(&self) -> AuthSelectionResult<Option<TypePath>>;
}

/// An auth scheme from the built-in scheme table.
#[derive(Debug, Clone, Copy)]
pub struct ModeledAuthScheme {
    descriptor: &'static SchemeDescriptor,
}

impl ModeledAuthScheme {
    /// Wrap a scheme table row.
    #[must_use]
    pub fn new(descriptor: &'static SchemeDescriptor) -> Self {
        Self { descriptor }
    }
}

impl AuthScheme for ModeledAuthScheme {
    fn scheme_id(&self) -> &str {
        self.descriptor.scheme_id
    }

    fn identity_kind(&self) -> IdentityKind {
        match self.descriptor.scheme_id {
            NO_AUTH_SCHEME_ID => IdentityKind::Anonymous,
            BEARER_SCHEME_ID => IdentityKind::Token,
            _ => IdentityKind::AwsCredentials,
        }
    }

    fn signer(&self) -> AuthSelectionResult<Option<TypePath>> {
        Ok(self.descriptor.signer)
    }
}

/// Auth schemes registered on a client, keyed by scheme id.
#[derive(Debug, Clone, Default)]
pub struct AuthSchemeRegistry {
    schemes: IndexMap<String, Arc<dyn AuthScheme>>,
}

impl AuthSchemeRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every scheme of the built-in scheme table.
    #[must_use]
    pub fn modeled() -> Self {
        schemes()
            .iter()
            .fold(Self::new(), |registry, descriptor| {
                registry.with_scheme(Arc::new(ModeledAuthScheme::new(descriptor)))
            })
    }

    /// Derive a registry with `scheme` registered, replacing any scheme with
    /// the same id.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Arc<dyn AuthScheme>) -> Self {
        self.schemes.insert(scheme.scheme_id().to_owned(), scheme);
        self
    }

    /// Look up a scheme by id.
    #[must_use]
    pub fn get(&self, scheme_id: &str) -> Option<&Arc<dyn AuthScheme>> {
        self.schemes.get(scheme_id)
    }
}

/// The option chosen to sign a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedAuthScheme {
    /// The winning option, with its signer properties.
    pub option: AuthSchemeOption,
    /// Identity the request is signed with.
    pub identity: IdentityKind,
    /// Signer type, if the request is signed.
    pub signer: Option<TypePath>,
}

/// Pick the first usable option.
///
/// # Errors
///
/// Returns [`AuthSelectionError::NoUsableScheme`] listing why each option was
/// discarded when none is usable.
///
/// # Examples
///
/// ```
/// use sdkgen_auth::{AuthSchemeOption, AuthSchemeRegistry, IdentityProviders, select_auth_scheme};
///
/// let options = vec![
///     AuthSchemeOption::new("aws.auth#sigv4"),
///     AuthSchemeOption::new("smithy.api#noAuth"),
/// ];
/// let selected =
///     select_auth_scheme(&options, &AuthSchemeRegistry::modeled(), &IdentityProviders::new()).unwrap();
/// assert_eq!(selected.option.scheme_id(), "smithy.api#noAuth");
/// ```
pub fn select_auth_scheme(
    options: &[AuthSchemeOption],
    registry: &AuthSchemeRegistry,
    identities: &IdentityProviders,
) -> AuthSelectionResult<SelectedAuthScheme> {
    let mut reasons = Vec::new();
    for option in options {
        let scheme_id = option.scheme_id();
        let Some(scheme) = registry.get(scheme_id) else {
            reasons.push(format!("'{scheme_id}' is not enabled for this request."));
            continue;
        };
        let identity = scheme.identity_kind();
        if !identities.contains(identity) {
            reasons.push(format!(
                "'{scheme_id}' does not have an identity provider configured."
            ));
            continue;
        }
        match scheme.signer() {
            Ok(signer) => {
                for reason in &reasons {
                    warn!(%reason, "discarded auth scheme option");
                }
                debug!(%scheme_id, ?identity, "selected auth scheme");
                return Ok(SelectedAuthScheme {
                    option: option.clone(),
                    identity,
                    signer,
                });
            }
            Err(err) => {
                reasons.push(format!("'{scheme_id}' signer could not be retrieved: {err}"));
            }
        }
    }
    Err(AuthSelectionError::NoUsableScheme { reasons })
}
