//! Built-in SigV4 signer defaults for the legacy auth types.
//!
//! The registry is built on first access and shared, unchanged, for the rest
//! of the process.

use std::sync::LazyLock;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::error::{AuthSchemeError, AuthSchemeResult};
use crate::scheme::SIGV4_SCHEME_ID;
use crate::signer_defaults::SigV4SignerDefaults;

/// Map from auth type name to its signer defaults.
pub type AuthTypeDefaults = IndexMap<String, SigV4SignerDefaults>;

static AUTH_TYPE_TO_DEFAULTS: LazyLock<AuthTypeDefaults> = LazyLock::new(|| {
    match build_auth_type_defaults([
        sigv4_default(),
        s3_defaults(),
        s3v4_defaults(),
        v4_unsigned_body_defaults(),
    ]) {
        Ok(defaults) => defaults,
        Err(err) => panic!("built-in SigV4 signer defaults are inconsistent: {err}"),
    }
});

/// The process-wide signer defaults, keyed by auth type name.
///
/// # Examples
///
/// ```
/// use sdkgen_auth_scheme::auth_type_to_defaults;
///
/// let s3 = &auth_type_to_defaults()["s3"];
/// assert_eq!(s3.service(), Some("S3"));
/// assert_eq!(s3.payload_signing_enabled(), Some(false));
/// ```
#[must_use]
pub fn auth_type_to_defaults() -> &'static AuthTypeDefaults {
    &AUTH_TYPE_TO_DEFAULTS
}

/// Signer defaults for one auth type name.
#[must_use]
pub fn defaults_for(auth_type: &str) -> Option<&'static SigV4SignerDefaults> {
    AUTH_TYPE_TO_DEFAULTS.get(auth_type)
}

/// Build a registry from a list of root nodes.
///
/// # Errors
///
/// Returns [`AuthSchemeError::DuplicateAuthType`] when two nodes share an auth
/// type, or the first validation error of any node.
pub fn build_auth_type_defaults(
    entries: impl IntoIterator<Item = SigV4SignerDefaults>,
) -> AuthSchemeResult<AuthTypeDefaults> {
    let mut defaults = AuthTypeDefaults::new();
    for entry in entries {
        entry.validate()?;
        match defaults.entry(entry.auth_type().to_owned()) {
            Entry::Occupied(occupied) => {
                return Err(AuthSchemeError::DuplicateAuthType(occupied.key().clone()));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(entry);
            }
        }
    }
    debug!(entries = defaults.len(), "built SigV4 signer defaults registry");
    Ok(defaults)
}

/// Plain SigV4, no overrides.
fn sigv4_default() -> SigV4SignerDefaults {
    SigV4SignerDefaults::builder()
        .auth_type("v4")
        .scheme_id(SIGV4_SCHEME_ID)
        .build()
}

/// S3 signs without path normalization or double encoding and with unsigned
/// payloads; object uploads additionally use chunked encoding.
fn s3_defaults() -> SigV4SignerDefaults {
    sigv4_default()
        .with_auth_type("s3")
        .with_service("S3")
        .with_double_url_encode(false)
        .with_normalize_path(false)
        .with_payload_signing_enabled(false)
        .with_operation("UploadPart", s3_upload_defaults())
        .with_operation("PutObject", s3_upload_defaults())
}

fn s3_upload_defaults() -> SigV4SignerDefaults {
    sigv4_default()
        .with_auth_type("s3")
        .with_double_url_encode(false)
        .with_normalize_path(false)
        .with_payload_signing_enabled(false)
        .with_chunk_encoding_enabled(true)
}

/// Used by S3 Control.
fn s3v4_defaults() -> SigV4SignerDefaults {
    sigv4_default()
        .with_auth_type("s3v4")
        .with_double_url_encode(false)
        .with_normalize_path(false)
}

fn v4_unsigned_body_defaults() -> SigV4SignerDefaults {
    sigv4_default()
        .with_auth_type("v4-unsigned-body")
        .with_payload_signing_enabled(false)
}
