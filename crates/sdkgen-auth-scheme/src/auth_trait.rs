//! The per-operation auth trait used as a grouping key.

use sdkgen_model::{AuthType, OperationModel};
use serde::Serialize;

/// One declared auth type of an operation together with its unsigned-payload
/// flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTrait {
    auth_type: AuthType,
    unsigned_payload: bool,
}

impl AuthTrait {
    /// Create a new auth trait.
    #[must_use]
    pub fn new(auth_type: AuthType, unsigned_payload: bool) -> Self {
        Self {
            auth_type,
            unsigned_payload,
        }
    }

    /// The declared auth type.
    #[must_use]
    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    /// Whether the payload is sent unsigned.
    #[must_use]
    pub fn is_unsigned_payload(&self) -> bool {
        self.unsigned_payload
    }

    /// The traits of an operation, one per declared auth type, in order.
    #[must_use]
    pub fn for_operation(operation: &OperationModel) -> Vec<Self> {
        operation
            .auth
            .iter()
            .map(|auth_type| Self::new(*auth_type, operation.unsigned_payload))
            .collect()
    }

    /// Signed traits for a list of service-level auth types.
    #[must_use]
    pub fn for_service(auth_types: &[AuthType]) -> Vec<Self> {
        auth_types.iter().map(|t| Self::new(*t, false)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_share_unsigned_flag_across_declared_types() {
        let op = OperationModel::builder()
            .auth(vec![AuthType::V4a, AuthType::V4])
            .unsigned_payload(true)
            .build();

        let traits = AuthTrait::for_operation(&op);
        assert_eq!(
            traits,
            vec![
                AuthTrait::new(AuthType::V4a, true),
                AuthTrait::new(AuthType::V4, true)
            ]
        );
    }

    #[test]
    fn test_should_compare_by_both_fields() {
        assert_ne!(
            AuthTrait::new(AuthType::V4, true),
            AuthTrait::new(AuthType::V4, false)
        );
        assert_ne!(
            vec![AuthTrait::new(AuthType::V4, false), AuthTrait::new(AuthType::Bearer, false)],
            vec![AuthTrait::new(AuthType::Bearer, false), AuthTrait::new(AuthType::V4, false)]
        );
    }

    #[test]
    fn test_should_build_signed_service_traits() {
        let traits = AuthTrait::for_service(&[AuthType::S3]);
        assert_eq!(traits, vec![AuthTrait::new(AuthType::S3, false)]);
    }
}
