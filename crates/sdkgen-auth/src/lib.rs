//! Runtime auth-scheme resolution and selection for sdkgen clients.
//!
//! Generated clients resolve a list of candidate auth schemes per request
//! from the service model, optionally reorder it by user preference, and sign
//! with the first candidate the client can actually use.
//!
//! # Usage
//!
//! ```rust
//! use sdkgen_auth::{
//!     AuthSchemeParams, AuthSchemePreference, AuthSchemeProvider, AuthSchemeRegistry,
//!     IdentityKind, IdentityProviders, ModeledAuthSchemeProvider, PreferredAuthSchemeProvider,
//!     select_auth_scheme,
//! };
//! use sdkgen_model::{AuthType, IntermediateModel, ServiceMetadata};
//!
//! let mut metadata = ServiceMetadata::builder().service_name("Echo").signing_name("echo").build();
//! metadata.auth = vec![AuthType::V4, AuthType::V4a];
//! let model = IntermediateModel::builder().metadata(metadata).build();
//!
//! let provider = PreferredAuthSchemeProvider::new(
//!     ModeledAuthSchemeProvider::from_model(&model).unwrap(),
//!     AuthSchemePreference::parse("sigv4a"),
//! );
//! let params = AuthSchemeParams::builder()
//!     .operation("Ping")
//!     .region("us-east-1")
//!     .region_set("*")
//!     .build();
//! let options = provider.resolve_auth_scheme(&params);
//! assert_eq!(options[0].scheme_id(), "aws.auth#sigv4a");
//!
//! let identities = IdentityProviders::new().with(IdentityKind::AwsCredentials);
//! let selected = select_auth_scheme(&options, &AuthSchemeRegistry::modeled(), &identities).unwrap();
//! assert_eq!(selected.option.scheme_id(), "aws.auth#sigv4a");
//! ```

mod error;
mod option;
mod preference;
mod provider;
mod selection;

pub use error::{AuthSelectionError, AuthSelectionResult};
pub use option::{AuthSchemeOption, AuthSchemeParams, PropertyValue};
pub use preference::{AUTH_SCHEME_PREFERENCE_ENV, AuthSchemePreference, PreferredAuthSchemeProvider};
pub use provider::{AuthSchemeProvider, ModeledAuthSchemeProvider};
pub use selection::{
    AuthScheme, AuthSchemeRegistry, IdentityKind, IdentityProviders, ModeledAuthScheme,
    SelectedAuthScheme, select_auth_scheme,
};
