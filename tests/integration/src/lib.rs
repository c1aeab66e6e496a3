//! Integration tests for stackname.
//!
//! These exercise the full path from raw configuration to a declared log
//! bucket across the core and naming crates.
//!
//! Run them with:
//! ```text
//! cargo test -p stackname-integration
//! ```

use std::sync::Once;

use chrono::NaiveDate;
use stackname_core::{FixedClock, StackConfig};
use stackname_naming::{DefinedStack, NamingResult, RecordingProvider, StackProps, define_stack};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
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

/// Clock pinned to `date` (`YYYY-MM-DD`).
///
/// # Panics
///
/// Panics if `date` is malformed.
#[must_use]
pub fn clock_on(date: &str) -> FixedClock {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("bad test date {date}: {e}"));
    FixedClock::new(date)
}

/// Build a config from `(variable, value)` pairs, as if read from the environment.
///
/// # Panics
///
/// Panics if the configuration is rejected.
#[must_use]
pub fn config_from(vars: &[(&str, &str)]) -> StackConfig {
    init_tracing();
    StackConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    })
    .unwrap_or_else(|e| panic!("config rejected: {e}"))
}

/// Define a stack from `config`, returning the result and everything declared.
pub fn synthesize(config: &StackConfig) -> (NamingResult<DefinedStack>, RecordingProvider) {
    init_tracing();
    let mut provider = RecordingProvider::new();
    let clock = config.clock();
    let result = define_stack(&StackProps::from(config), clock.as_ref(), &mut provider);
    (result, provider)
}

mod test_naming;
mod test_stack;
