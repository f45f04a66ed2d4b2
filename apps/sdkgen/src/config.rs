//! Configuration of the `sdkgen` binary.
//!
//! Values are loaded from environment variables; command line flags override
//! them.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// `sdkgen` configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SdkgenConfig {
    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// Region used when resolving auth options without `--region`.
    #[builder(default = String::from("us-east-1"))]
    pub default_region: String,

    /// Whether JSON output is pretty-printed.
    #[builder(default = false)]
    pub pretty: bool,

    /// Comma-separated auth scheme preference, if configured.
    #[builder(default, setter(strip_option, into))]
    pub auth_scheme_preference: Option<String>,
}

impl Default for SdkgenConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("info"),
            default_region: String::from("us-east-1"),
            pretty: false,
            auth_scheme_preference: None,
        }
    }
}

impl SdkgenConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LOG_LEVEL` | `info` |
    /// | `SDKGEN_DEFAULT_REGION` | `us-east-1` |
    /// | `SDKGEN_PRETTY` | `false` |
    /// | `SDKGEN_AUTH_SCHEME_PREFERENCE` | *(unset)* |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Ok(v) = std::env::var("SDKGEN_DEFAULT_REGION") {
            config.default_region = v;
        }
        if let Ok(v) = std::env::var("SDKGEN_PRETTY") {
            config.pretty = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("SDKGEN_AUTH_SCHEME_PREFERENCE") {
            config.auth_scheme_preference = Some(v);
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
