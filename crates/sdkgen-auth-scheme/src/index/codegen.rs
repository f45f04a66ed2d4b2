//! View used by the auth-scheme provider emitter.

use sdkgen_model::IntermediateModel;

use super::model::{ModelAuthSchemeKnowledgeIndex, OperationsToMetadata};
use crate::error::AuthSchemeResult;
use crate::metadata::AuthSchemeCodegenMetadata;

/// Service defaults plus the per-operation override groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSchemeCodegenKnowledgeIndex {
    operations_to_metadata: OperationsToMetadata,
}

impl AuthSchemeCodegenKnowledgeIndex {
    /// Build the view for a model.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`ModelAuthSchemeKnowledgeIndex::of`].
    pub fn of(model: &IntermediateModel) -> AuthSchemeResult<Self> {
        Ok(Self::from_index(ModelAuthSchemeKnowledgeIndex::of(model)?))
    }

    /// Wrap an already computed index.
    #[must_use]
    pub fn from_index(index: ModelAuthSchemeKnowledgeIndex) -> Self {
        Self {
            operations_to_metadata: index.into_operations_to_metadata(),
        }
    }

    /// Schemes of operations without an override.
    #[must_use]
    pub fn service_default_auth_schemes(&self) -> &[AuthSchemeCodegenMetadata] {
        let empty: &[String] = &[];
        self.operations_to_metadata
            .get(empty)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether any operation resolves to something other than the defaults.
    #[must_use]
    pub fn has_per_operation_auth_schemes_overrides(&self) -> bool {
        self.operations_to_metadata.len() > 1
    }

    /// Override groups in generation order, without the defaults entry.
    pub fn operations_overrides(
        &self,
    ) -> impl Iterator<Item = (&[String], &[AuthSchemeCodegenMetadata])> {
        self.operations_to_metadata
            .iter()
            .filter(|(ops, _)| !ops.is_empty())
            .map(|(ops, schemes)| (ops.as_slice(), schemes.as_slice()))
    }

    /// Call `f` once per override group, in generation order.
    pub fn for_each_operations_overrides_group<F>(&self, mut f: F)
    where
        F: FnMut(&[String], &[AuthSchemeCodegenMetadata]),
    {
        for (ops, schemes) in self.operations_overrides() {
            f(ops, schemes);
        }
    }
}
