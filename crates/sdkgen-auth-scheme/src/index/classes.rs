//! The concrete auth-scheme types a generated client registers.

use sdkgen_model::IntermediateModel;
use tracing::debug;

use super::model::ModelAuthSchemeKnowledgeIndex;
use crate::error::AuthSchemeResult;
use crate::metadata::AuthSchemeCodegenMetadata;
use crate::scheme::{AWS_V4A_AUTH_SCHEME, NO_AUTH_AUTH_SCHEME, TypePath};

/// Distinct auth-scheme types used anywhere in a service, sorted by simple
/// name.
///
/// The anonymous scheme is always present. SigV4a is added when endpoint
/// rules may select it at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAuthSchemeClassesKnowledgeIndex {
    classes: Vec<TypePath>,
}

impl ModelAuthSchemeClassesKnowledgeIndex {
    /// Build the view for a model.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`ModelAuthSchemeKnowledgeIndex::of`].
    pub fn of(model: &IntermediateModel) -> AuthSchemeResult<Self> {
        let index = ModelAuthSchemeKnowledgeIndex::of(model)?;
        Ok(Self::from_index(model, &index))
    }

    /// Derive the view from an already computed index of `model`.
    #[must_use]
    pub fn from_index(model: &IntermediateModel, index: &ModelAuthSchemeKnowledgeIndex) -> Self {
        let mut classes: Vec<TypePath> = index
            .operations_to_metadata()
            .values()
            .flatten()
            .map(AuthSchemeCodegenMetadata::auth_scheme_class)
            .collect();
        classes.push(NO_AUTH_AUTH_SCHEME);
        if model.uses_endpoint_based_auth_scheme_resolution() {
            debug!(
                service = %model.metadata.service_name,
                "endpoint rules may select SigV4a"
            );
            classes.push(AWS_V4A_AUTH_SCHEME);
        }
        classes.sort_by(|a, b| a.simple_name().cmp(b.simple_name()).then_with(|| a.cmp(b)));
        classes.dedup();
        Self { classes }
    }

    /// The sorted, distinct auth-scheme types.
    #[must_use]
    pub fn service_concrete_auth_scheme_classes(&self) -> &[TypePath] {
        &self.classes
    }
}
