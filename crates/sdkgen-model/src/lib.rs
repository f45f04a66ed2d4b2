//! Intermediate service model for the sdkgen code generator.
//!
//! The intermediate model is the already-resolved view of a service that the
//! generator works from: service-level metadata (legacy and modeled auth
//! types, signing name), customization switches, and one entry per operation
//! with the facts the auth-scheme indices care about (declared auth types,
//! streaming input, checksum requirements, unsigned payload).
//!
//! Operations are kept in an insertion-ordered map so every consumer sees the
//! same iteration order on every run.
//!
//! # Usage
//!
//! ```rust
//! use sdkgen_model::IntermediateModel;
//!
//! let model = IntermediateModel::from_json_str(
//!     r#"{
//!         "metadata": { "serviceName": "Echo", "signingName": "echo" },
//!         "operations": { "Ping": {} }
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(model.operations.len(), 1);
//! ```

mod auth_type;
mod error;
mod operation;
mod service;

pub use auth_type::AuthType;
pub use error::{ModelError, ModelResult};
pub use operation::{HttpChecksum, OperationModel};
pub use service::{CustomizationConfig, IntermediateModel, ServiceMetadata};
