//! Auth-scheme providers.
//!
//! A provider returns the candidate auth schemes for a request in priority
//! order. [`ModeledAuthSchemeProvider`] answers from the service model;
//! [`PreferredAuthSchemeProvider`](crate::PreferredAuthSchemeProvider) wraps
//! any provider to apply a user preference.

use std::fmt;

use sdkgen_auth_scheme::ModelAuthSchemeKnowledgeIndex;
use sdkgen_model::IntermediateModel;

use crate::error::AuthSelectionResult;
use crate::option::{AuthSchemeOption, AuthSchemeParams};

/// Resolves the candidate auth schemes of a request.
pub trait AuthSchemeProvider: fmt::Debug + Send + Sync {
    /// Candidate options, most preferred first.
    fn resolve_auth_scheme(&self, params: &AuthSchemeParams) -> Vec<AuthSchemeOption>;
}

/// Provider backed by the auth-scheme knowledge index of a model.
///
/// # Examples
///
/// ```
/// use sdkgen_auth::{AuthSchemeParams, AuthSchemeProvider, ModeledAuthSchemeProvider};
/// use sdkgen_model::{AuthType, IntermediateModel, OperationModel, ServiceMetadata};
///
/// let model = IntermediateModel::builder()
///     .metadata(ServiceMetadata::builder().service_name("Echo").signing_name("echo").build())
///     .build()
///     .with_operation("Ping", OperationModel::builder().auth(vec![AuthType::None]).build());
///
/// let provider = ModeledAuthSchemeProvider::from_model(&model).unwrap();
/// let options = provider.resolve_auth_scheme(&AuthSchemeParams::builder().operation("Ping").build());
/// assert_eq!(options[0].scheme_id(), "smithy.api#noAuth");
/// ```
#[derive(Debug, Clone)]
pub struct ModeledAuthSchemeProvider {
    signing_name: String,
    index: ModelAuthSchemeKnowledgeIndex,
}

impl ModeledAuthSchemeProvider {
    /// Build a provider for a model.
    ///
    /// # Errors
    ///
    /// Returns [`AuthSelectionError::Index`](crate::AuthSelectionError::Index)
    /// when the knowledge index cannot be built.
    pub fn from_model(model: &IntermediateModel) -> AuthSelectionResult<Self> {
        let index = ModelAuthSchemeKnowledgeIndex::of(model)?;
        Ok(Self::new(model.metadata.signing_name.clone(), index))
    }

    /// Build a provider from an already computed index.
    #[must_use]
    pub fn new(signing_name: impl Into<String>, index: ModelAuthSchemeKnowledgeIndex) -> Self {
        Self {
            signing_name: signing_name.into(),
            index,
        }
    }
}

impl AuthSchemeProvider for ModeledAuthSchemeProvider {
    fn resolve_auth_scheme(&self, params: &AuthSchemeParams) -> Vec<AuthSchemeOption> {
        self.index
            .auth_schemes_for_operation(params.operation())
            .iter()
            .map(|metadata| AuthSchemeOption::from_metadata(metadata, params, &self.signing_name))
            .collect()
    }
}
