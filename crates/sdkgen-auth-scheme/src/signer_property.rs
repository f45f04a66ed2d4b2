//! Signer property values attached to an auth scheme.
//!
//! A property value is either a constant known while generating code, or an
//! expression that generated code evaluates per request. Emitters dispatch on
//! [`SignerPropertyValue`] explicitly.

use serde::Serialize;

use crate::scheme::{AWS_V4_FAMILY_HTTP_SIGNER, AWS_V4_HTTP_SIGNER, AWS_V4A_HTTP_SIGNER, TypePath};

/// `SERVICE_SIGNING_NAME` signer property.
pub const SERVICE_SIGNING_NAME: &str = "SERVICE_SIGNING_NAME";
/// `REGION_NAME` signer property.
pub const REGION_NAME: &str = "REGION_NAME";
/// `REGION_SET` signer property.
pub const REGION_SET: &str = "REGION_SET";
/// `DOUBLE_URL_ENCODE` signer property.
pub const DOUBLE_URL_ENCODE: &str = "DOUBLE_URL_ENCODE";
/// `NORMALIZE_PATH` signer property.
pub const NORMALIZE_PATH: &str = "NORMALIZE_PATH";
/// `PAYLOAD_SIGNING_ENABLED` signer property.
pub const PAYLOAD_SIGNING_ENABLED: &str = "PAYLOAD_SIGNING_ENABLED";
/// `CHUNK_ENCODING_ENABLED` signer property.
pub const CHUNK_ENCODING_ENABLED: &str = "CHUNK_ENCODING_ENABLED";

/// A value fixed at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    /// Boolean literal.
    Bool(bool),
    /// String literal.
    Str(String),
}

/// A value computed by generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueExpression {
    /// The service signing name, taken from the model being generated.
    ServiceSigningName,
    /// The region of the auth-scheme parameters.
    Region,
    /// The region set of the auth-scheme parameters.
    RegionSet,
}

/// Either a constant or a deferred expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SignerPropertyValue {
    /// Known while generating code.
    Constant(ConstantValue),
    /// Evaluated by generated code.
    Expression(ValueExpression),
}

/// Inputs needed to render a property value into generated source.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Signing name of the service being generated.
    pub signing_name: &'a str,
}

impl SignerPropertyValue {
    /// Whether the value is a generation-time constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Render the value as a source expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdkgen_auth_scheme::signer_property::{
    ///     ConstantValue, RenderContext, SignerPropertyValue, ValueExpression,
    /// };
    ///
    /// let ctx = RenderContext { signing_name: "s3" };
    /// assert_eq!(SignerPropertyValue::Constant(ConstantValue::Bool(false)).render(&ctx), "false");
    /// assert_eq!(
    ///     SignerPropertyValue::Expression(ValueExpression::ServiceSigningName).render(&ctx),
    ///     "\"s3\""
    /// );
    /// ```
    #[must_use]
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Self::Constant(ConstantValue::Bool(b)) => b.to_string(),
            Self::Constant(ConstantValue::Str(s)) => format!("{s:?}"),
            Self::Expression(ValueExpression::ServiceSigningName) => {
                format!("{:?}", ctx.signing_name)
            }
            Self::Expression(ValueExpression::Region) => "params.region()".to_owned(),
            Self::Expression(ValueExpression::RegionSet) => "params.region_set()".to_owned(),
        }
    }
}

/// One signer property assignment of an auth scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerPropertyValueProvider {
    /// Type that declares the property key.
    pub containing_type: TypePath,
    /// Name of the property key.
    pub field_name: &'static str,
    /// Value assigned to the property.
    pub value: SignerPropertyValue,
}

impl SignerPropertyValueProvider {
    /// A boolean constant declared on the SigV4 family signer.
    #[must_use]
    pub fn sigv4_flag(field_name: &'static str, value: bool) -> Self {
        Self {
            containing_type: AWS_V4_FAMILY_HTTP_SIGNER,
            field_name,
            value: SignerPropertyValue::Constant(ConstantValue::Bool(value)),
        }
    }

    /// `SERVICE_SIGNING_NAME` from the model.
    #[must_use]
    pub fn service_signing_name() -> Self {
        Self {
            containing_type: AWS_V4_FAMILY_HTTP_SIGNER,
            field_name: SERVICE_SIGNING_NAME,
            value: SignerPropertyValue::Expression(ValueExpression::ServiceSigningName),
        }
    }

    /// `REGION_NAME` from the request parameters.
    #[must_use]
    pub fn region_name() -> Self {
        Self {
            containing_type: AWS_V4_HTTP_SIGNER,
            field_name: REGION_NAME,
            value: SignerPropertyValue::Expression(ValueExpression::Region),
        }
    }

    /// `REGION_SET` from the request parameters.
    #[must_use]
    pub fn region_set() -> Self {
        Self {
            containing_type: AWS_V4A_HTTP_SIGNER,
            field_name: REGION_SET,
            value: SignerPropertyValue::Expression(ValueExpression::RegionSet),
        }
    }

    /// Whether the value is a generation-time constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.value.is_constant()
    }

    /// The boolean value, if this is a boolean constant.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            SignerPropertyValue::Constant(ConstantValue::Bool(b)) => Some(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_classify_constants_and_expressions() {
        assert!(SignerPropertyValueProvider::sigv4_flag(NORMALIZE_PATH, false).is_constant());
        assert!(!SignerPropertyValueProvider::service_signing_name().is_constant());
        assert!(!SignerPropertyValueProvider::region_name().is_constant());
        assert!(!SignerPropertyValueProvider::region_set().is_constant());
    }

    #[test]
    fn test_should_render_expressions() {
        let ctx = RenderContext {
            signing_name: "execute-api",
        };
        assert_eq!(
            SignerPropertyValueProvider::region_name().value.render(&ctx),
            "params.region()"
        );
        assert_eq!(
            SignerPropertyValueProvider::service_signing_name()
                .value
                .render(&ctx),
            "\"execute-api\""
        );
        assert_eq!(
            SignerPropertyValue::Constant(ConstantValue::Str("a\"b".to_owned())).render(&ctx),
            "\"a\\\"b\""
        );
    }

    #[test]
    fn test_should_serialize_tagged_value() {
        let json =
            serde_json::to_value(SignerPropertyValueProvider::sigv4_flag(DOUBLE_URL_ENCODE, false))
                .unwrap();
        assert_eq!(json["fieldName"], "DOUBLE_URL_ENCODE");
        assert_eq!(json["value"]["kind"], "constant");
        assert_eq!(json["value"]["value"], false);
    }

    #[test]
    fn test_should_expose_bool_constant() {
        assert_eq!(
            SignerPropertyValueProvider::sigv4_flag(CHUNK_ENCODING_ENABLED, true).as_bool(),
            Some(true)
        );
        assert_eq!(SignerPropertyValueProvider::region_name().as_bool(), None);
    }
}
