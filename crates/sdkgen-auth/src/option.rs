//! Auth-scheme options and the request parameters they are resolved from.

use indexmap::IndexMap;
use sdkgen_auth_scheme::AuthSchemeCodegenMetadata;
use sdkgen_auth_scheme::signer_property::{ConstantValue, SignerPropertyValue, ValueExpression};
use serde::Serialize;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Per-request inputs to auth-scheme resolution.
///
/// # Examples
///
/// ```
/// use sdkgen_auth::AuthSchemeParams;
///
/// let params = AuthSchemeParams::builder()
///     .operation("GetObject")
///     .region("us-west-2")
///     .build();
/// assert_eq!(params.operation(), "GetObject");
/// assert_eq!(params.region(), Some("us-west-2"));
/// assert_eq!(params.region_set(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct AuthSchemeParams {
    #[builder(setter(into))]
    operation: String,

    #[builder(default, setter(strip_option, into))]
    region: Option<String>,

    #[builder(default, setter(strip_option, into))]
    region_set: Option<String>,
}

impl AuthSchemeParams {
    /// Name of the operation being invoked.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Signing region.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// SigV4a region set.
    #[must_use]
    pub fn region_set(&self) -> Option<&str> {
        self.region_set.as_deref()
    }
}

/// A resolved signer property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(String),
}

/// One candidate auth scheme for a request, with the signer properties it
/// should be used with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSchemeOption {
    scheme_id: String,
    signer_properties: IndexMap<&'static str, PropertyValue>,
}

impl AuthSchemeOption {
    /// An option without signer properties.
    #[must_use]
    pub fn new(scheme_id: impl Into<String>) -> Self {
        Self {
            scheme_id: scheme_id.into(),
            signer_properties: IndexMap::new(),
        }
    }

    /// Derive an option with one more signer property.
    #[must_use]
    pub fn with_signer_property(mut self, field_name: &'static str, value: PropertyValue) -> Self {
        self.signer_properties.insert(field_name, value);
        self
    }

    /// Resolve the option described by codegen metadata for one request.
    ///
    /// Expressions whose input is missing from `params` are left unset.
    #[must_use]
    pub fn from_metadata(
        metadata: &AuthSchemeCodegenMetadata,
        params: &AuthSchemeParams,
        signing_name: &str,
    ) -> Self {
        metadata
            .properties()
            .iter()
            .fold(Self::new(metadata.scheme_id()), |option, property| {
                match resolve_value(&property.value, params, signing_name) {
                    Some(value) => option.with_signer_property(property.field_name, value),
                    None => {
                        debug!(
                            scheme_id = metadata.scheme_id(),
                            field = property.field_name,
                            operation = params.operation(),
                            "signer property input missing, leaving unset"
                        );
                        option
                    }
                }
            })
    }

    /// Scheme id.
    #[must_use]
    pub fn scheme_id(&self) -> &str {
        &self.scheme_id
    }

    /// Signer properties, in insertion order.
    #[must_use]
    pub fn signer_properties(&self) -> &IndexMap<&'static str, PropertyValue> {
        &self.signer_properties
    }

    /// One signer property by field name.
    #[must_use]
    pub fn signer_property(&self, field_name: &str) -> Option<&PropertyValue> {
        self.signer_properties.get(field_name)
    }
}

fn resolve_value(
    value: &SignerPropertyValue,
    params: &AuthSchemeParams,
    signing_name: &str,
) -> Option<PropertyValue> {
    match value {
        SignerPropertyValue::Constant(ConstantValue::Bool(b)) => Some(PropertyValue::Bool(*b)),
        SignerPropertyValue::Constant(ConstantValue::Str(s)) => Some(PropertyValue::Str(s.clone())),
        SignerPropertyValue::Expression(ValueExpression::ServiceSigningName) => {
            Some(PropertyValue::Str(signing_name.to_owned()))
        }
        SignerPropertyValue::Expression(ValueExpression::Region) => {
            params.region().map(|r| PropertyValue::Str(r.to_owned()))
        }
        SignerPropertyValue::Expression(ValueExpression::RegionSet) => {
            params.region_set().map(|r| PropertyValue::Str(r.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_auth_scheme::signer_property::{
        CHUNK_ENCODING_ENABLED, REGION_NAME, REGION_SET, SERVICE_SIGNING_NAME,
        SignerPropertyValueProvider,
    };

    use super::*;

    fn params() -> AuthSchemeParams {
        AuthSchemeParams::builder()
            .operation("PutObject")
            .region("eu-central-1")
            .build()
    }

    #[test]
    fn test_should_resolve_sigv4_expressions_from_params() {
        let metadata = AuthSchemeCodegenMetadata::sigv4().with_property(
            SignerPropertyValueProvider::sigv4_flag(CHUNK_ENCODING_ENABLED, true),
        );
        let option = AuthSchemeOption::from_metadata(&metadata, &params(), "s3");

        assert_eq!(option.scheme_id(), "aws.auth#sigv4");
        let fields: Vec<&str> = option.signer_properties().keys().copied().collect();
        assert_eq!(fields, vec![SERVICE_SIGNING_NAME, REGION_NAME, CHUNK_ENCODING_ENABLED]);
        assert_eq!(
            option.signer_property(SERVICE_SIGNING_NAME),
            Some(&PropertyValue::Str("s3".to_owned()))
        );
        assert_eq!(
            option.signer_property(REGION_NAME),
            Some(&PropertyValue::Str("eu-central-1".to_owned()))
        );
        assert_eq!(
            option.signer_property(CHUNK_ENCODING_ENABLED),
            Some(&PropertyValue::Bool(true))
        );
    }

    #[test]
    fn test_should_leave_missing_region_set_unset() {
        let option = AuthSchemeOption::from_metadata(&AuthSchemeCodegenMetadata::sigv4a(), &params(), "s3");
        assert!(option.signer_property(REGION_SET).is_none());
        assert_eq!(option.signer_properties().len(), 1);
    }

    #[test]
    fn test_should_serialize_option_as_camel_case() {
        let option = AuthSchemeOption::new("smithy.api#noAuth")
            .with_signer_property("FLAG", PropertyValue::Bool(false));
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "schemeId": "smithy.api#noAuth", "signerProperties": { "FLAG": false } })
        );
    }
}
