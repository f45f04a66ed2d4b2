//! User preference over the order of candidate auth schemes.

use tracing::debug;

use crate::option::{AuthSchemeOption, AuthSchemeParams};
use crate::provider::AuthSchemeProvider;

/// Environment variable holding a comma-separated auth scheme preference.
pub const AUTH_SCHEME_PREFERENCE_ENV: &str = "AWS_AUTH_SCHEME_PREFERENCE";

/// Ordered list of preferred scheme ids.
///
/// An entry matches an option by full scheme id (`aws.auth#sigv4a`) or by the
/// name after `#` (`sigv4a`).
///
/// # Examples
///
/// ```
/// use sdkgen_auth::AuthSchemePreference;
///
/// let preference = AuthSchemePreference::parse(" sigv4a, ,httpBearerAuth ");
/// assert_eq!(preference.as_slice(), ["sigv4a", "httpBearerAuth"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSchemePreference(Vec<String>);

impl AuthSchemePreference {
    /// Create a preference from ids.
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(ids.into_iter().map(Into::into).collect())
    }

    /// Parse a comma-separated list, trimming entries and dropping blanks.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::new(value.split(',').map(str::trim).filter(|id| !id.is_empty()))
    }

    /// Read the preference from `AWS_AUTH_SCHEME_PREFERENCE`; empty when unset.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(AUTH_SCHEME_PREFERENCE_ENV)
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    /// Whether no preference is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The preferred ids, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Reorder options: for each preferred id, the first option matching it
    /// moves to the front; the rest keep their relative order. An option is
    /// placed at most once.
    #[must_use]
    pub fn apply(&self, options: Vec<AuthSchemeOption>) -> Vec<AuthSchemeOption> {
        if self.is_empty() {
            return options;
        }
        let mut placed = vec![false; options.len()];
        let mut order = Vec::with_capacity(options.len());
        for preferred in &self.0 {
            let found = options
                .iter()
                .position(|option| matches_preference(option.scheme_id(), preferred));
            if let Some(i) = found.filter(|i| !placed[*i]) {
                placed[i] = true;
                order.push(i);
            }
        }
        order.extend((0..options.len()).filter(|i| !placed[*i]));

        let mut slots: Vec<Option<AuthSchemeOption>> = options.into_iter().map(Some).collect();
        order.into_iter().filter_map(|i| slots[i].take()).collect()
    }
}

fn matches_preference(scheme_id: &str, preferred: &str) -> bool {
    scheme_id == preferred
        || scheme_id
            .split_once('#')
            .is_some_and(|(_, name)| name == preferred)
}

/// Provider that reorders the options of a delegate by preference.
///
/// Options are never dropped; unmatched preferences are ignored.
#[derive(Debug)]
pub struct PreferredAuthSchemeProvider<P> {
    delegate: P,
    preference: AuthSchemePreference,
}

impl<P: AuthSchemeProvider> PreferredAuthSchemeProvider<P> {
    /// Wrap a provider.
    pub fn new(delegate: P, preference: AuthSchemePreference) -> Self {
        Self {
            delegate,
            preference,
        }
    }

    /// The preference being applied.
    #[must_use]
    pub fn preference(&self) -> &AuthSchemePreference {
        &self.preference
    }
}

impl<P: AuthSchemeProvider> AuthSchemeProvider for PreferredAuthSchemeProvider<P> {
    fn resolve_auth_scheme(&self, params: &AuthSchemeParams) -> Vec<AuthSchemeOption> {
        let candidates = self.delegate.resolve_auth_scheme(params);
        if self.preference.is_empty() {
            return candidates;
        }
        let ordered = self.preference.apply(candidates);
        debug!(
            operation = params.operation(),
            preference = ?self.preference.as_slice(),
            order = ?ordered.iter().map(AuthSchemeOption::scheme_id).collect::<Vec<_>>(),
            "applied auth scheme preference"
        );
        ordered
    }
}
