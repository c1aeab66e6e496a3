//! stackname - validates deployment parameters and declares the stack's log bucket.
//!
//! Reads the stack parameters from the environment, runs the environment and
//! region guards, generates the access-log bucket name, and declares it
//! against an in-memory provider. The defined stack and the declared
//! resources are printed to stdout as JSON; logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! STACK_ENVIRONMENT=test STACK_REGION=eu-west-3 stackname
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STACK_ID` | `EMD-CaseStudy` | Stack identifier |
//! | `STACK_ENVIRONMENT` | `development` | Deployment environment |
//! | `STACK_REGION` | `us-east-1` | Deployment region (empty = absent) |
//! | `STACK_DATE` | *(today)* | Pin the bucket date (`YYYY-MM-DD`) |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stackname_core::StackConfig;
use stackname_naming::{DefinedStack, LogBucketSpec, RecordingProvider, StackProps, define_stack};

/// Version reported in the startup log line.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output document printed on success.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Synthesis<'a> {
    stack: &'a DefinedStack,
    log_buckets: &'a [LogBucketSpec],
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
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

/// Define the stack described by `config` and render the result as JSON.
fn run(config: &StackConfig) -> Result<String> {
    info!(
        version = VERSION,
        stack_id = %config.stack_id,
        environment = %config.environment,
        region = config.region.as_deref().unwrap_or("<absent>"),
        "defining stack"
    );

    let props = StackProps::from(config);
    let clock = config.clock();
    let mut provider = RecordingProvider::new();

    let stack = define_stack(&props, clock.as_ref(), &mut provider)
        .with_context(|| format!("failed to define stack {}", props.stack_id))?;

    let output = Synthesis {
        stack: &stack,
        log_buckets: provider.buckets(),
    };
    serde_json::to_string_pretty(&output).context("failed to serialize stack")
}

fn main() -> Result<()> {
    let config = StackConfig::from_env().context("failed to load stack configuration")?;
    init_tracing(&config.log_level)?;

    println!("{}", run(&config)?);

    Ok(())
}
