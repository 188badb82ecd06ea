//! autoboto-inspect - browse and validate the bundled service shape models.
//!
//! The binary links every generated model crate and reads their static
//! descriptors: shapes with their field mapping tables, string enums and
//! operations with their wire bindings. `check` runs the static validator and
//! exits non-zero when a mapping table disagrees with its struct.
//!
//! # Usage
//!
//! ```text
//! autoboto-inspect services
//! autoboto-inspect describe waf ByteMatchTuple
//! AUTOBOTO_OUTPUT=json autoboto-inspect operations mediaconvert
//! autoboto-inspect check
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AUTOBOTO_OUTPUT` | `text` | Output format when `--format` is not given (`text` or `json`) |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod config;
mod render;

use std::io::{self, Write};

use anyhow::{Context, Result};
use autoboto_core::{ServiceModel, ShapeKind, find_service, validate_service};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{InspectConfig, OutputFormat};
use crate::render::{
    CheckView, EnumRow, EnumView, OperationView, ServiceView, ShapeRow, ShapeView, emit,
};

/// Every service model compiled into this binary.
static SERVICES: &[&ServiceModel] = &[
    &autoboto_mediaconvert_model::SERVICE_MODEL,
    &autoboto_waf_model::SERVICE_MODEL,
];

#[derive(Parser, Debug)]
#[command(
    name = "autoboto-inspect",
    version,
    about = "Browse and validate autoboto service shape models"
)]
struct Cli {
    /// Output format (defaults to $AUTOBOTO_OUTPUT, then text)
    #[arg(short = 'f', long = "format", value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the bundled service models
    Services,

    /// List the structures of one service
    Shapes {
        /// Service name (e.g. `waf`)
        service: String,

        /// Only list shapes of this kind
        #[arg(short = 'k', long = "kind", value_parser = parse_kind)]
        kind: Option<ShapeKind>,
    },

    /// Show the field mapping table of one shape
    Describe {
        /// Service name
        service: String,

        /// Shape name as it appears in the service model
        shape: String,
    },

    /// List string enums, or the known values of one enum
    Enums {
        /// Service name
        service: String,

        /// Enum name
        name: Option<String>,
    },

    /// List operations with their HTTP binding or JSON RPC target
    Operations {
        /// Service name
        service: String,
    },

    /// Validate mapping tables and references, failing on any issue
    Check {
        /// Service name (all services when omitted)
        service: Option<String>,
    },
}

fn parse_kind(raw: &str) -> Result<ShapeKind, String> {
    ShapeKind::from_name(&raw.to_ascii_lowercase())
        .ok_or_else(|| format!("unknown shape kind `{raw}` (input, output, structure, error)"))
}

/// Initialize the tracing subscriber on stderr.
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
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// Execute one command, writing its result to `out`.
fn run(command: &Commands, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Services => {
            let views: Vec<_> = SERVICES.iter().map(|s| ServiceView::new(s)).collect();
            emit(&views, format, out)
        }
        Commands::Shapes { service, kind } => {
            let service = find_service(SERVICES, service)?;
            let rows: Vec<_> = service
                .shapes
                .iter()
                .filter(|s| kind.is_none_or(|k| s.kind == k))
                .map(ShapeRow::new)
                .collect();
            debug!(service = service.name, count = rows.len(), "listing shapes");
            emit(&rows, format, out)
        }
        Commands::Describe { service, shape } => {
            let service = find_service(SERVICES, service)?;
            let shape = service.require_shape(shape)?;
            emit(&ShapeView::new(service, shape), format, out)
        }
        Commands::Enums { service, name } => {
            let service = find_service(SERVICES, service)?;
            match name {
                Some(name) => {
                    let descriptor = service.require_enumeration(name)?;
                    emit(&EnumView::new(descriptor), format, out)
                }
                None => {
                    let rows: Vec<_> = service.enums.iter().map(EnumRow::new).collect();
                    emit(&rows, format, out)
                }
            }
        }
        Commands::Operations { service } => {
            let service = find_service(SERVICES, service)?;
            let views: Vec<_> = service
                .operations
                .iter()
                .map(|op| OperationView::new(service, op))
                .collect();
            emit(&views, format, out)
        }
        Commands::Check { service } => {
            let targets = match service {
                Some(name) => vec![find_service(SERVICES, name)?],
                None => SERVICES.to_vec(),
            };
            let mut views = Vec::with_capacity(targets.len());
            for service in targets {
                debug!(service = service.name, "validating service model");
                let report = validate_service(service);
                for issue in &report.issues {
                    warn!(service = service.name, %issue, "model issue");
                }
                views.push(CheckView::new(&report));
            }
            emit(&views, format, out)?;

            let issues: usize = views.iter().map(|v| v.issues.len()).sum();
            if issues > 0 {
                anyhow::bail!("{issues} model issue(s) found");
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = InspectConfig::from_env()?;
    init_tracing(&config.log_level)?;

    let format = cli.format.unwrap_or(config.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli.command, format, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> Result<String> {
        let argv = std::iter::once("autoboto-inspect").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv)?;
        let mut buf = Vec::new();
        run(&cli.command, cli.format.unwrap_or_default(), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_should_register_every_model_crate() {
        let names: Vec<_> = SERVICES.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["mediaconvert", "waf"]);
    }

    #[test]
    fn test_should_parse_shape_kind_case_insensitively() {
        assert_eq!(parse_kind("Error"), Ok(ShapeKind::Error));
        assert!(parse_kind("exception").is_err());
    }

    #[test]
    fn test_should_filter_shapes_by_kind() {
        let listing = run_to_string(&["shapes", "waf", "--kind", "error"]).unwrap();
        assert_eq!(listing.lines().count(), 14);
        assert!(listing.lines().all(|l| l.starts_with("error")));
    }

    #[test]
    fn test_should_fail_on_unknown_service() {
        let err = run_to_string(&["operations", "s3"]).unwrap_err();
        assert!(err.to_string().contains("unknown service `s3`"));
    }

    #[test]
    fn test_should_pass_check_for_all_services() {
        let output = run_to_string(&["check"]).unwrap();
        assert_eq!(output, "mediaconvert: ok\nwaf: ok\n");
    }

    #[test]
    fn test_should_accept_global_format_after_subcommand() {
        let output = run_to_string(&["enums", "waf", "RateKey", "--format", "json"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["values"], serde_json::json!(["IP"]));
    }
}
