//! View used by the SigV4 signer customization emitter.
//!
//! Only SigV4 entries that carry generation-time constants are kept; entries
//! whose properties are all runtime expressions need no customization.

use indexmap::IndexMap;
use sdkgen_model::IntermediateModel;

use super::model::ModelAuthSchemeKnowledgeIndex;
use crate::error::AuthSchemeResult;
use crate::metadata::AuthSchemeCodegenMetadata;

/// Operation groups mapped to the constant SigV4 properties they set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigV4AuthSchemeCodegenKnowledgeIndex {
    overrides: IndexMap<Vec<String>, AuthSchemeCodegenMetadata>,
}

impl SigV4AuthSchemeCodegenKnowledgeIndex {
    /// Build the view for a model.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`ModelAuthSchemeKnowledgeIndex::of`].
    pub fn of(model: &IntermediateModel) -> AuthSchemeResult<Self> {
        Ok(Self::from_index(&ModelAuthSchemeKnowledgeIndex::of(model)?))
    }

    /// Derive the view from an already computed index.
    #[must_use]
    pub fn from_index(index: &ModelAuthSchemeKnowledgeIndex) -> Self {
        let overrides = index
            .operations_to_metadata()
            .iter()
            .filter_map(|(ops, schemes)| {
                schemes
                    .iter()
                    .find(|scheme| scheme.is_sigv4())
                    .map(AuthSchemeCodegenMetadata::constant_properties_only)
                    .filter(|scheme| !scheme.properties().is_empty())
                    .map(|scheme| (ops.clone(), scheme))
            })
            .collect();
        Self { overrides }
    }

    /// Whether any group sets SigV4 constants.
    #[must_use]
    pub fn has_sig_v4_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }

    /// Whether a group other than the defaults sets SigV4 constants.
    #[must_use]
    pub fn has_per_operation_sig_v4_overrides(&self) -> bool {
        self.overrides.keys().any(|ops| !ops.is_empty())
    }

    /// Whether the defaults set SigV4 constants.
    #[must_use]
    pub fn has_default_sig_v4_overrides(&self) -> bool {
        self.default_sig_v4_overrides().is_some()
    }

    /// Constant SigV4 properties of the defaults.
    #[must_use]
    pub fn default_sig_v4_overrides(&self) -> Option<&AuthSchemeCodegenMetadata> {
        let empty: &[String] = &[];
        self.overrides.get(empty)
    }

    /// Call `f` once per non-default group, in generation order.
    pub fn for_each_operations_overrides_group<F>(&self, mut f: F)
    where
        F: FnMut(&[String], &AuthSchemeCodegenMetadata),
    {
        for (ops, scheme) in &self.overrides {
            if !ops.is_empty() {
                f(ops.as_slice(), scheme);
            }
        }
    }
}
