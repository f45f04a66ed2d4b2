//! SigV4 signer property defaults keyed by legacy auth type.
//!
//! A [`SigV4SignerDefaults`] node carries the signer flags an auth type implies
//! and, for service-wide overrides, nested nodes for operations that sign
//! differently from the rest of the service. Nodes are immutable; variants are
//! derived with the consuming `with_*` methods:
//!
//! ```
//! use sdkgen_auth_scheme::SigV4SignerDefaults;
//!
//! let v4 = SigV4SignerDefaults::builder()
//!     .auth_type("v4")
//!     .scheme_id("aws.auth#sigv4")
//!     .build();
//! let unsigned = v4.clone().with_auth_type("v4-unsigned-body").with_payload_signing_enabled(false);
//!
//! assert_eq!(v4.payload_signing_enabled(), None);
//! assert_eq!(unsigned.payload_signing_enabled(), Some(false));
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::error::{AuthSchemeError, AuthSchemeResult};

/// Signer flag overrides for one auth type, optionally with per-operation
/// sub-overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SigV4SignerDefaults {
    #[builder(setter(into))]
    auth_type: String,

    #[builder(setter(into))]
    scheme_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    double_url_encode: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    normalize_path: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    payload_signing_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    chunk_encoding_enabled: Option<bool>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    #[builder(default)]
    operations: IndexMap<String, SigV4SignerDefaults>,
}

impl SigV4SignerDefaults {
    /// Auth type this node is registered under.
    #[must_use]
    pub fn auth_type(&self) -> &str {
        &self.auth_type
    }

    /// Scheme id the flags apply to.
    #[must_use]
    pub fn scheme_id(&self) -> &str {
        &self.scheme_id
    }

    /// Service name, set only on service-wide override roots.
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// `DOUBLE_URL_ENCODE` override.
    #[must_use]
    pub fn double_url_encode(&self) -> Option<bool> {
        self.double_url_encode
    }

    /// `NORMALIZE_PATH` override.
    #[must_use]
    pub fn normalize_path(&self) -> Option<bool> {
        self.normalize_path
    }

    /// `PAYLOAD_SIGNING_ENABLED` override.
    #[must_use]
    pub fn payload_signing_enabled(&self) -> Option<bool> {
        self.payload_signing_enabled
    }

    /// `CHUNK_ENCODING_ENABLED` override.
    #[must_use]
    pub fn chunk_encoding_enabled(&self) -> Option<bool> {
        self.chunk_encoding_enabled
    }

    /// Per-operation overrides, in declaration order.
    #[must_use]
    pub fn operations(&self) -> &IndexMap<String, SigV4SignerDefaults> {
        &self.operations
    }

    /// Whether this node overrides auth for a whole service.
    #[must_use]
    pub fn is_service_override_auth_scheme(&self) -> bool {
        self.service.is_some()
    }

    /// Derive a node registered under a different auth type.
    #[must_use]
    pub fn with_auth_type(mut self, auth_type: impl Into<String>) -> Self {
        self.auth_type = auth_type.into();
        self
    }

    /// Derive a service-wide override root.
    #[must_use]
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Derive a node with `DOUBLE_URL_ENCODE` set.
    #[must_use]
    pub fn with_double_url_encode(mut self, value: bool) -> Self {
        self.double_url_encode = Some(value);
        self
    }

    /// Derive a node with `NORMALIZE_PATH` set.
    #[must_use]
    pub fn with_normalize_path(mut self, value: bool) -> Self {
        self.normalize_path = Some(value);
        self
    }

    /// Derive a node with `PAYLOAD_SIGNING_ENABLED` set.
    #[must_use]
    pub fn with_payload_signing_enabled(mut self, value: bool) -> Self {
        self.payload_signing_enabled = Some(value);
        self
    }

    /// Derive a node with `CHUNK_ENCODING_ENABLED` set.
    #[must_use]
    pub fn with_chunk_encoding_enabled(mut self, value: bool) -> Self {
        self.chunk_encoding_enabled = Some(value);
        self
    }

    /// Derive a node with an added (or replaced) per-operation override.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>, defaults: Self) -> Self {
        self.operations.insert(operation.into(), defaults);
        self
    }

    /// Check the structural invariants of this node and its children.
    ///
    /// # Errors
    ///
    /// Returns [`AuthSchemeError::MissingField`] if `auth_type` or `scheme_id`
    /// is blank, and [`AuthSchemeError::NestedServiceOverride`] if a nested
    /// node declares a service.
    pub fn validate(&self) -> AuthSchemeResult<()> {
        self.validate_required()?;
        for (operation, nested) in &self.operations {
            if nested.service.is_some() {
                return Err(AuthSchemeError::NestedServiceOverride {
                    auth_type: self.auth_type.clone(),
                    operation: operation.clone(),
                });
            }
            nested.validate()?;
        }
        Ok(())
    }

    fn validate_required(&self) -> AuthSchemeResult<()> {
        if self.auth_type.trim().is_empty() {
            return Err(AuthSchemeError::MissingField {
                auth_type: self.auth_type.clone(),
                field: "authType",
            });
        }
        if self.scheme_id.trim().is_empty() {
            return Err(AuthSchemeError::MissingField {
                auth_type: self.auth_type.clone(),
                field: "schemeId",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4() -> SigV4SignerDefaults {
        SigV4SignerDefaults::builder()
            .auth_type("v4")
            .scheme_id("aws.auth#sigv4")
            .build()
    }

    #[test]
    fn test_should_leave_flags_unset_by_default() {
        let defaults = v4();
        assert_eq!(defaults.double_url_encode(), None);
        assert_eq!(defaults.normalize_path(), None);
        assert_eq!(defaults.payload_signing_enabled(), None);
        assert_eq!(defaults.chunk_encoding_enabled(), None);
        assert!(defaults.operations().is_empty());
        assert!(!defaults.is_service_override_auth_scheme());
    }

    #[test]
    fn test_should_derive_without_touching_original() {
        let base = v4();
        let derived = base
            .clone()
            .with_auth_type("s3v4")
            .with_double_url_encode(false)
            .with_normalize_path(false);

        assert_eq!(base.auth_type(), "v4");
        assert_eq!(base.double_url_encode(), None);
        assert_eq!(derived.auth_type(), "s3v4");
        assert_eq!(derived.scheme_id(), "aws.auth#sigv4");
        assert_eq!(derived.double_url_encode(), Some(false));
        assert_eq!(derived.normalize_path(), Some(false));
    }

    #[test]
    fn test_should_keep_operation_override_order() {
        let defaults = v4()
            .with_service("S3")
            .with_operation("UploadPart", v4().with_chunk_encoding_enabled(true))
            .with_operation("PutObject", v4().with_chunk_encoding_enabled(true));

        let names: Vec<&str> = defaults.operations().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["UploadPart", "PutObject"]);
        assert!(defaults.is_service_override_auth_scheme());
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_should_reject_blank_scheme_id() {
        let defaults = SigV4SignerDefaults::builder()
            .auth_type("v4")
            .scheme_id("")
            .build();
        assert_eq!(
            defaults.validate().unwrap_err(),
            AuthSchemeError::MissingField {
                auth_type: "v4".to_owned(),
                field: "schemeId",
            }
        );
    }

    #[test]
    fn test_should_reject_service_on_nested_node() {
        let defaults = v4().with_operation("PutObject", v4().with_service("S3"));
        assert_eq!(
            defaults.validate().unwrap_err(),
            AuthSchemeError::NestedServiceOverride {
                auth_type: "v4".to_owned(),
                operation: "PutObject".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_validate_nested_required_fields() {
        let nested = SigV4SignerDefaults::builder()
            .auth_type("")
            .scheme_id("aws.auth#sigv4")
            .build();
        let defaults = v4().with_operation("PutObject", nested);
        assert!(matches!(
            defaults.validate(),
            Err(AuthSchemeError::MissingField { field: "authType", .. })
        ));
    }
}
