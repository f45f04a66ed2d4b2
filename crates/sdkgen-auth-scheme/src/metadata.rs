//! Resolved auth-scheme metadata handed to the code emitters.

use sdkgen_model::AuthType;
use serde::Serialize;

use crate::auth_trait::AuthTrait;
use crate::error::{AuthSchemeError, AuthSchemeResult};
use crate::registry;
use crate::scheme::{
    AWS_V4_AUTH_SCHEME, AWS_V4A_AUTH_SCHEME, BEARER_AUTH_SCHEME, BEARER_SCHEME_ID,
    NO_AUTH_AUTH_SCHEME, NO_AUTH_SCHEME_ID, SIGV4_SCHEME_ID, SIGV4A_SCHEME_ID, TypePath,
    require_scheme,
};
use crate::signer_defaults::SigV4SignerDefaults;
use crate::signer_property::{
    CHUNK_ENCODING_ENABLED, DOUBLE_URL_ENCODE, NORMALIZE_PATH, PAYLOAD_SIGNING_ENABLED,
    SignerPropertyValueProvider,
};

/// One auth scheme with the signer properties generated code sets on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSchemeCodegenMetadata {
    scheme_id: String,
    auth_scheme_class: TypePath,
    properties: Vec<SignerPropertyValueProvider>,
}

impl AuthSchemeCodegenMetadata {
    /// Metadata for a scheme id from the scheme table, without properties.
    ///
    /// # Errors
    ///
    /// Returns [`AuthSchemeError::UnknownSchemeId`] for ids outside the table.
    pub fn for_scheme(scheme_id: &str) -> AuthSchemeResult<Self> {
        let descriptor = require_scheme(scheme_id)?;
        Ok(Self {
            scheme_id: descriptor.scheme_id.to_owned(),
            auth_scheme_class: descriptor.auth_scheme,
            properties: Vec::new(),
        })
    }

    /// SigV4 with the signing name and region expressions.
    #[must_use]
    pub fn sigv4() -> Self {
        Self::well_known(SIGV4_SCHEME_ID, AWS_V4_AUTH_SCHEME)
            .with_property(SignerPropertyValueProvider::service_signing_name())
            .with_property(SignerPropertyValueProvider::region_name())
    }

    /// SigV4a with the signing name and region-set expressions.
    #[must_use]
    pub fn sigv4a() -> Self {
        Self::well_known(SIGV4A_SCHEME_ID, AWS_V4A_AUTH_SCHEME)
            .with_property(SignerPropertyValueProvider::service_signing_name())
            .with_property(SignerPropertyValueProvider::region_set())
    }

    /// Bearer auth.
    #[must_use]
    pub fn bearer() -> Self {
        Self::well_known(BEARER_SCHEME_ID, BEARER_AUTH_SCHEME)
    }

    /// Anonymous requests.
    #[must_use]
    pub fn no_auth() -> Self {
        Self::well_known(NO_AUTH_SCHEME_ID, NO_AUTH_AUTH_SCHEME)
    }

    fn well_known(scheme_id: &'static str, auth_scheme_class: TypePath) -> Self {
        Self {
            scheme_id: scheme_id.to_owned(),
            auth_scheme_class,
            properties: Vec::new(),
        }
    }

    /// Resolve the metadata for one auth trait.
    ///
    /// # Errors
    ///
    /// Returns [`AuthSchemeError::UnsupportedAuthType`] for auth types without
    /// a scheme mapping and [`AuthSchemeError::UnknownAuthType`] for SigV4
    /// auth types missing from the registry.
    pub fn from_auth_trait(auth_trait: &AuthTrait) -> AuthSchemeResult<Self> {
        let metadata = match auth_trait.auth_type() {
            AuthType::None => Self::no_auth(),
            AuthType::Bearer => Self::bearer(),
            AuthType::V4a => {
                let metadata = Self::sigv4a();
                if auth_trait.is_unsigned_payload() {
                    metadata.with_property(SignerPropertyValueProvider::sigv4_flag(
                        PAYLOAD_SIGNING_ENABLED,
                        false,
                    ))
                } else {
                    metadata
                }
            }
            AuthType::Custom | AuthType::Iam => {
                return Err(AuthSchemeError::UnsupportedAuthType(
                    auth_trait.auth_type().as_str().to_owned(),
                ));
            }
            AuthType::V4 | AuthType::V4UnsignedBody | AuthType::S3 | AuthType::S3V4 => {
                let name = auth_trait.auth_type().as_str();
                let defaults = registry::defaults_for(name)
                    .ok_or_else(|| AuthSchemeError::UnknownAuthType(name.to_owned()))?;
                if auth_trait.is_unsigned_payload() {
                    Self::from_constants(&defaults.clone().with_payload_signing_enabled(false))?
                } else {
                    Self::from_constants(defaults)?
                }
            }
        };
        Ok(metadata)
    }

    /// Resolve the metadata for a list of auth traits, preserving order.
    ///
    /// # Errors
    ///
    /// Same as [`AuthSchemeCodegenMetadata::from_auth_trait`].
    pub fn from_auth_traits(traits: &[AuthTrait]) -> AuthSchemeResult<Vec<Self>> {
        traits.iter().map(Self::from_auth_trait).collect()
    }

    /// Build SigV4-family metadata from a signer defaults node.
    ///
    /// Flags that are set become boolean constants, appended in the order
    /// double-url-encode, normalize-path, payload-signing, chunk-encoding.
    ///
    /// # Errors
    ///
    /// Returns [`AuthSchemeError::UnknownSchemeId`] if the node targets a
    /// scheme that is not part of the SigV4 family.
    pub fn from_constants(defaults: &SigV4SignerDefaults) -> AuthSchemeResult<Self> {
        let mut metadata = match defaults.scheme_id() {
            SIGV4_SCHEME_ID => Self::sigv4(),
            SIGV4A_SCHEME_ID => Self::sigv4a(),
            other => return Err(AuthSchemeError::UnknownSchemeId(other.to_owned())),
        };
        let flags = [
            (DOUBLE_URL_ENCODE, defaults.double_url_encode()),
            (NORMALIZE_PATH, defaults.normalize_path()),
            (PAYLOAD_SIGNING_ENABLED, defaults.payload_signing_enabled()),
            (CHUNK_ENCODING_ENABLED, defaults.chunk_encoding_enabled()),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                metadata = metadata.with_property(SignerPropertyValueProvider::sigv4_flag(field, value));
            }
        }
        Ok(metadata)
    }

    /// Scheme id.
    #[must_use]
    pub fn scheme_id(&self) -> &str {
        &self.scheme_id
    }

    /// Concrete auth-scheme type.
    #[must_use]
    pub fn auth_scheme_class(&self) -> TypePath {
        self.auth_scheme_class
    }

    /// Signer properties, in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[SignerPropertyValueProvider] {
        &self.properties
    }

    /// Look up a property by field name.
    #[must_use]
    pub fn property(&self, field_name: &str) -> Option<&SignerPropertyValueProvider> {
        self.properties.iter().find(|p| p.field_name == field_name)
    }

    /// Whether this is the SigV4 scheme.
    #[must_use]
    pub fn is_sigv4(&self) -> bool {
        self.scheme_id == SIGV4_SCHEME_ID
    }

    /// Whether the scheme's signer understands the SigV4 family properties.
    #[must_use]
    pub fn is_sigv4_family(&self) -> bool {
        require_scheme(&self.scheme_id).is_ok_and(|d| d.sigv4_family)
    }

    /// Derive metadata with a property set; an existing property with the same
    /// field name is replaced where it stands.
    #[must_use]
    pub fn with_property(mut self, property: SignerPropertyValueProvider) -> Self {
        match self
            .properties
            .iter_mut()
            .find(|p| p.field_name == property.field_name)
        {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
        self
    }

    /// Derive metadata that signs with chunked encoding. Schemes outside the
    /// SigV4 family are returned unchanged.
    #[must_use]
    pub fn with_chunk_encoding(self) -> Self {
        if self.is_sigv4_family() {
            self.with_property(SignerPropertyValueProvider::sigv4_flag(
                CHUNK_ENCODING_ENABLED,
                true,
            ))
        } else {
            self
        }
    }

    /// Derive metadata keeping only constant-valued properties.
    #[must_use]
    pub fn constant_properties_only(&self) -> Self {
        Self {
            scheme_id: self.scheme_id.clone(),
            auth_scheme_class: self.auth_scheme_class,
            properties: self
                .properties
                .iter()
                .filter(|p| p.is_constant())
                .cloned()
                .collect(),
        }
    }
}

/// Add chunked encoding to every scheme of a list.
#[must_use]
pub fn with_chunk_encoding(schemes: &[AuthSchemeCodegenMetadata]) -> Vec<AuthSchemeCodegenMetadata> {
    schemes
        .iter()
        .cloned()
        .map(AuthSchemeCodegenMetadata::with_chunk_encoding)
        .collect()
}
