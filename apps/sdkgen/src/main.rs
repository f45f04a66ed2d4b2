//! sdkgen - auth-scheme knowledge indices from the command line.
//!
//! Reads an intermediate service model (JSON) and either prints the full
//! auth-scheme knowledge index the code emitters consume, or resolves the
//! ordered auth options of a single operation.
//!
//! # Usage
//!
//! ```text
//! sdkgen index --model s3.json --pretty
//! sdkgen resolve --model s3.json --operation PutObject --region us-west-2 --preference sigv4a
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SDKGEN_MODEL` | *(unset)* | Model path when `--model` is omitted |
//! | `SDKGEN_DEFAULT_REGION` | `us-east-1` | Region when `--region` is omitted |
//! | `SDKGEN_PRETTY` | `false` | Pretty-print JSON output |
//! | `SDKGEN_AUTH_SCHEME_PREFERENCE` | *(unset)* | Preference when `--preference` is omitted |
//! | `AWS_AUTH_SCHEME_PREFERENCE` | *(unset)* | Fallback preference |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod config;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sdkgen_auth::{
    AuthSchemeParams, AuthSchemePreference, AuthSchemeProvider, ModeledAuthSchemeProvider,
    PreferredAuthSchemeProvider,
};
use sdkgen_model::IntermediateModel;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::SdkgenConfig;
use crate::report::{IndexReport, ResolveReport, to_json};

/// Auth-scheme knowledge indices for generated service clients
#[derive(Debug, Parser)]
#[command(name = "sdkgen")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides `LOG_LEVEL`
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the auth-scheme knowledge index of a model
    #[command(name = "index")]
    Index {
        /// Path to the intermediate model JSON file
        #[arg(long, env = "SDKGEN_MODEL", value_name = "FILE")]
        model: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the ordered auth options of one operation
    #[command(name = "resolve")]
    Resolve {
        /// Path to the intermediate model JSON file
        #[arg(long, env = "SDKGEN_MODEL", value_name = "FILE")]
        model: PathBuf,

        /// Operation name
        #[arg(long)]
        operation: String,

        /// Signing region
        #[arg(long)]
        region: Option<String>,

        /// SigV4a region set
        #[arg(long)]
        region_set: Option<String>,

        /// Comma-separated preferred scheme ids (e.g. `sigv4a,sigv4`)
        #[arg(long)]
        preference: Option<String>,
    },
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout stays valid JSON.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn load_model(path: &Path) -> Result<IntermediateModel> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read model {}", path.display()))?;
    let model = IntermediateModel::from_json_str(&json)
        .with_context(|| format!("invalid model {}", path.display()))?;
    debug!(
        service = %model.metadata.service_name,
        operations = model.operations.len(),
        "loaded intermediate model"
    );
    Ok(model)
}

fn run_index(model_path: &Path, output: Option<&Path>, config: &SdkgenConfig) -> Result<()> {
    let model = load_model(model_path)?;
    let report = IndexReport::build(&model).with_context(|| {
        format!(
            "cannot build auth scheme index for {}",
            model.metadata.service_name
        )
    })?;
    info!(
        service = %model.metadata.service_name,
        override_groups = report.override_groups(),
        "built auth scheme knowledge index"
    );

    let json = to_json(&report, config.pretty).context("cannot serialize index report")?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("cannot write report to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn resolve_preference(cli: Option<&str>, config: &SdkgenConfig) -> AuthSchemePreference {
    cli.or(config.auth_scheme_preference.as_deref())
        .map_or_else(AuthSchemePreference::from_env, AuthSchemePreference::parse)
}

fn run_resolve(
    model_path: &Path,
    params: &AuthSchemeParams,
    preference: AuthSchemePreference,
    config: &SdkgenConfig,
) -> Result<()> {
    let model = load_model(model_path)?;
    if model.operation(params.operation()).is_none() {
        warn!(
            operation = params.operation(),
            "operation not in model, resolving service defaults"
        );
    }
    let provider = PreferredAuthSchemeProvider::new(
        ModeledAuthSchemeProvider::from_model(&model).with_context(|| {
            format!(
                "cannot build auth scheme provider for {}",
                model.metadata.service_name
            )
        })?,
        preference,
    );
    let options = provider.resolve_auth_scheme(params);
    let report = ResolveReport::new(params.operation(), options);
    println!(
        "{}",
        to_json(&report, config.pretty).context("cannot serialize resolve report")?
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SdkgenConfig::from_env();
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.pretty |= cli.pretty;
    init_tracing(&config.log_level)?;

    match cli.command {
        Commands::Index { model, output } => run_index(&model, output.as_deref(), &config),
        Commands::Resolve {
            model,
            operation,
            region,
            region_set,
            preference,
        } => {
            let preference = resolve_preference(preference.as_deref(), &config);
            let region = region.unwrap_or_else(|| config.default_region.clone());
            let params = match region_set {
                Some(region_set) => AuthSchemeParams::builder()
                    .operation(operation)
                    .region(region)
                    .region_set(region_set)
                    .build(),
                None => AuthSchemeParams::builder()
                    .operation(operation)
                    .region(region)
                    .build(),
            };
            run_resolve(&model, &params, preference, &config)
        }
    }
}
