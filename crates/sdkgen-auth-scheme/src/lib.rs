//! Auth-scheme knowledge indices for sdkgen client code generation.
//!
//! Given an [`IntermediateModel`](sdkgen_model::IntermediateModel), this crate
//! works out which auth schemes every operation of the service may use and
//! which signer properties generated code must set on each of them. Emitters
//! consume the result through a handful of read-only indices.
//!
//! # Overview
//!
//! Operations declare auth through an ordered list of auth types. The legacy
//! SigV4 auth types (`v4`, `s3`, `s3v4`, `v4-unsigned-body`) carry signer
//! defaults from a built-in registry; S3 additionally overrides auth for the
//! whole service and for individual upload operations. Streaming operations
//! with request checksums sign with chunked encoding.
//!
//! # Usage
//!
//! ```rust
//! use sdkgen_auth_scheme::{AuthSchemeCodegenKnowledgeIndex, SigV4SignerDefaults};
//! use sdkgen_model::{IntermediateModel, OperationModel, ServiceMetadata};
//!
//! let model = IntermediateModel::builder()
//!     .metadata(ServiceMetadata::builder().service_name("Echo").signing_name("echo").build())
//!     .build()
//!     .with_operation("Ping", OperationModel::default());
//!
//! let index = AuthSchemeCodegenKnowledgeIndex::of(&model).unwrap();
//! assert!(!index.has_per_operation_auth_schemes_overrides());
//!
//! let defaults = SigV4SignerDefaults::builder()
//!     .auth_type("v4")
//!     .scheme_id("aws.auth#sigv4")
//!     .build();
//! assert!(!defaults.is_service_override_auth_scheme());
//! ```
//!
//! # Modules
//!
//! - [`scheme`] - Well-known scheme ids and generated type paths
//! - [`signer_property`] - Signer property keys and values
//! - [`index`] - The operations → auth schemes index and its views

mod auth_trait;
mod error;
pub mod index;
mod metadata;
mod registry;
pub mod scheme;
mod signer_defaults;
pub mod signer_property;

pub use auth_trait::AuthTrait;
pub use error::{AuthSchemeError, AuthSchemeResult};
pub use index::{
    AuthSchemeCodegenKnowledgeIndex, ModelAuthSchemeClassesKnowledgeIndex,
    ModelAuthSchemeKnowledgeIndex, OperationsToMetadata, SigV4AuthSchemeCodegenKnowledgeIndex,
};
pub use metadata::{AuthSchemeCodegenMetadata, with_chunk_encoding};
pub use registry::{AuthTypeDefaults, auth_type_to_defaults, build_auth_type_defaults, defaults_for};
pub use signer_defaults::SigV4SignerDefaults;
