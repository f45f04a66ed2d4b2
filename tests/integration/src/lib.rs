//! End-to-end tests for the sdkgen auth-scheme indices.
//!
//! Models are built from JSON fixtures the way the generator receives them,
//! then run through the knowledge indices and the runtime resolver.
//!
//! Run them with:
//! ```text
//! cargo test -p sdkgen-integration
//! ```

use std::sync::Once;

use sdkgen_model::IntermediateModel;
use serde_json::{Value, json};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Parse a model fixture.
pub fn model(fixture: Value) -> anyhow::Result<IntermediateModel> {
    init_tracing();
    Ok(IntermediateModel::from_json_value(fixture)?)
}

/// A streaming upload with a required request checksum.
#[must_use]
pub fn checksummed_upload() -> Value {
    json!({
        "streaming": true,
        "httpChecksum": { "requestChecksumRequired": true }
    })
}

/// An S3-shaped service: legacy `s3` auth with upload operations.
#[must_use]
pub fn s3_fixture() -> Value {
    json!({
        "metadata": {
            "serviceName": "S3",
            "signingName": "s3",
            "authType": "s3",
            "auth": ["v4"]
        },
        "operations": {
            "GetObject": {},
            "ListBuckets": {},
            "PutObject": checksummed_upload(),
            "UploadPart": {
                "streaming": true,
                "httpChecksum": { "requestAlgorithmMember": "ChecksumAlgorithm" }
            },
            "WriteGetObjectResponse": {
                "auth": ["v4-unsigned-body"],
                "streaming": true,
                "unsignedPayload": true
            }
        },
        "customization": {
            "enableEndpointAuthSchemeParams": true
        }
    })
}

/// A generic JSON service with modeled auth and per-operation overrides.
#[must_use]
pub fn generic_fixture() -> Value {
    json!({
        "metadata": {
            "serviceName": "Catalog",
            "signingName": "catalog",
            "auth": ["v4", "bearer"]
        },
        "operations": {
            "DescribeItem": {},
            "ListItems": { "auth": ["v4", "bearer"] },
            "PublicPing": { "auth": ["none"] },
            "HealthCheck": { "auth": ["none"] },
            "UploadMedia": checksummed_upload(),
            "StreamEvents": { "auth": ["v4a", "v4"], "unsignedPayload": true },
            "ImportBatch": {
                "auth": ["v4a", "v4"],
                "unsignedPayload": true,
                "streaming": true,
                "httpChecksum": { "requestChecksumRequired": true }
            }
        }
    })
}

mod test_generic;
mod test_runtime;
mod test_s3;
