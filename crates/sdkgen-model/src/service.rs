//! Service-level metadata and the top-level intermediate model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::auth_type::AuthType;
use crate::error::{ModelError, ModelResult};
use crate::operation::OperationModel;

/// Service-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    /// Service name used as the key for service-wide signer overrides (e.g. `S3`).
    #[builder(setter(into))]
    pub service_name: String,

    /// Signing name used for `SERVICE_SIGNING_NAME` (e.g. `s3`).
    #[builder(setter(into))]
    pub signing_name: String,

    /// Legacy single auth type (derived from the signature version).
    #[serde(default)]
    #[builder(default)]
    pub auth_type: AuthType,

    /// Modeled auth types, in priority order.
    #[serde(default)]
    #[builder(default)]
    pub auth: Vec<AuthType>,
}

/// Generator customizations that change auth-scheme code generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationConfig {
    /// Derive auth-scheme parameters from the endpoint rule parameters.
    #[serde(default)]
    #[builder(default)]
    pub enable_endpoint_auth_scheme_params: bool,

    /// Endpoint auth-scheme parameters are resolved the legacy way, without an
    /// endpoint-based auth-scheme provider.
    #[serde(default)]
    #[builder(default)]
    pub legacy_endpoint_auth_scheme_params: bool,
}

/// The resolved model of one service.
///
/// # Examples
///
/// ```
/// use sdkgen_model::{AuthType, IntermediateModel, OperationModel, ServiceMetadata};
///
/// let model = IntermediateModel::builder()
///     .metadata(
///         ServiceMetadata::builder()
///             .service_name("Echo")
///             .signing_name("echo")
///             .build(),
///     )
///     .build()
///     .with_operation("Ping", OperationModel::default());
/// assert!(model.operation("Ping").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct IntermediateModel {
    /// Service metadata.
    pub metadata: ServiceMetadata,

    /// Operations keyed by name, in model order.
    #[serde(default)]
    #[builder(default)]
    pub operations: IndexMap<String, OperationModel>,

    /// Generator customizations.
    #[serde(default)]
    #[builder(default)]
    pub customization: CustomizationConfig,
}

impl IntermediateModel {
    /// Parse and validate a model from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Malformed`] if the document does not match the
    /// schema and [`ModelError::Invalid`] if it violates a structural rule.
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Parse and validate a model from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`IntermediateModel::from_json_str`].
    pub fn from_json_value(value: serde_json::Value) -> ModelResult<Self> {
        let model: Self = serde_json::from_value(value)?;
        model.validate()?;
        Ok(model)
    }

    /// Check the structural rules the deserializer cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Invalid`] naming the first violation.
    pub fn validate(&self) -> ModelResult<()> {
        if self.metadata.service_name.trim().is_empty() {
            return Err(ModelError::Invalid("serviceName must not be empty".to_owned()));
        }
        if self.metadata.signing_name.trim().is_empty() {
            return Err(ModelError::Invalid("signingName must not be empty".to_owned()));
        }
        if let Some(name) = self.operations.keys().find(|n| n.trim().is_empty()) {
            return Err(ModelError::Invalid(format!(
                "operation name must not be blank: {name:?}"
            )));
        }
        Ok(())
    }

    /// Add or replace an operation, keeping its original position on replace.
    #[must_use]
    pub fn with_operation(mut self, name: impl Into<String>, operation: OperationModel) -> Self {
        self.operations.insert(name.into(), operation);
        self
    }

    /// Look up an operation by name.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<&OperationModel> {
        self.operations.get(name)
    }

    /// Whether auth schemes are resolved through the endpoint-based provider.
    #[must_use]
    pub fn uses_endpoint_based_auth_scheme_resolution(&self) -> bool {
        self.customization.enable_endpoint_auth_scheme_params
            && !self.customization.legacy_endpoint_auth_scheme_params
    }
}
