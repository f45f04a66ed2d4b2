//! Per-operation model facts.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::auth_type::AuthType;

/// Request checksum requirements declared on an operation (`httpChecksum`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct HttpChecksum {
    /// Input member that carries the checksum algorithm, if any.
    #[serde(default)]
    #[builder(default, setter(strip_option, into))]
    pub request_algorithm_member: Option<String>,

    /// Whether a request checksum is mandatory.
    #[serde(default)]
    #[builder(default)]
    pub request_checksum_required: bool,
}

/// A single operation of the service.
///
/// The operation name is the key it is stored under in
/// [`IntermediateModel::operations`](crate::IntermediateModel::operations).
///
/// # Examples
///
/// ```
/// use sdkgen_model::{AuthType, HttpChecksum, OperationModel};
///
/// let op = OperationModel::builder()
///     .auth(vec![AuthType::V4])
///     .streaming(true)
///     .http_checksum(HttpChecksum::builder().request_checksum_required(true).build())
///     .build();
/// assert!(op.has_auth());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct OperationModel {
    /// Auth types declared on the operation, in declaration order.
    #[serde(default)]
    #[builder(default)]
    pub auth: Vec<AuthType>,

    /// Whether the operation takes a streaming request body.
    #[serde(default)]
    #[builder(default)]
    pub streaming: bool,

    /// Whether the operation carries the `unsignedPayload` trait.
    #[serde(default)]
    #[builder(default)]
    pub unsigned_payload: bool,

    /// Request checksum requirements.
    #[serde(default)]
    #[builder(default, setter(strip_option))]
    pub http_checksum: Option<HttpChecksum>,
}

impl OperationModel {
    /// Returns `true` if the operation declares at least one auth type.
    #[must_use]
    pub fn has_auth(&self) -> bool {
        !self.auth.is_empty()
    }
}
