//! Knowledge indices consulted while generating a service client.
//!
//! [`ModelAuthSchemeKnowledgeIndex`] computes the operations → auth schemes
//! map once; the other indices are read-only views over it shaped for
//! individual emitters.

mod classes;
mod codegen;
mod model;
mod sigv4;

pub use classes::ModelAuthSchemeClassesKnowledgeIndex;
pub use codegen::AuthSchemeCodegenKnowledgeIndex;
pub use model::{
    ModelAuthSchemeKnowledgeIndex, OperationsToMetadata, WRITE_GET_OBJECT_RESPONSE,
    requires_chunked_encoding, service_default_auth_types,
};
pub use sigv4::SigV4AuthSchemeCodegenKnowledgeIndex;
