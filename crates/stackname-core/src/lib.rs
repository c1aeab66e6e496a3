//! Core types, configuration, and date sources for stackname.
//!
//! This crate holds the pieces shared by the naming layer and the CLI: the
//! closed [`Environment`] and [`Region`] tags, the [`ConfigError`] taxonomy,
//! the raw [`StackConfig`], and the injectable [`Clock`].

mod clock;
mod config;
mod error;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DEFAULT_STACK_ID, StackConfig};
pub use error::{ConfigError, ConfigResult};
pub use types::{Environment, Region};
