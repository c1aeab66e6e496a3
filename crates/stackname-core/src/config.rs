//! Stack configuration.
//!
//! Provides [`StackConfig`], the raw deployment parameters handed to the
//! stack definition. Values are loaded from environment variables and are
//! **not** validated here: environment and region stay plain strings until
//! the stack definition runs its guards, so a bad value is reported with the
//! full allow-list instead of being silently replaced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::{ConfigError, ConfigResult};

/// Stack identifier used when none is configured.
pub const DEFAULT_STACK_ID: &str = "EMD-CaseStudy";

/// Raw stack configuration.
///
/// # Examples
///
/// ```
/// use stackname_core::StackConfig;
///
/// let config = StackConfig::default();
/// assert_eq!(config.environment, "development");
/// assert_eq!(config.region.as_deref(), Some("us-east-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct StackConfig {
    /// Stack identifier.
    #[builder(default = String::from(DEFAULT_STACK_ID), setter(into))]
    pub stack_id: String,

    /// Deployment environment tag, as configured.
    #[builder(default = String::from("development"), setter(into))]
    pub environment: String,

    /// Deployment region tag, as configured. `None` means no region was given.
    #[builder(default = Some(String::from("us-east-1")))]
    pub region: Option<String>,

    /// Pins the deployment date instead of reading the system clock.
    #[builder(default)]
    pub date: Option<NaiveDate>,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"), setter(into))]
    pub log_level: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl StackConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `STACK_ID` | `EMD-CaseStudy` |
    /// | `STACK_ENVIRONMENT` | `development` |
    /// | `STACK_REGION` | `us-east-1` (empty means absent) |
    /// | `STACK_DATE` | *(system clock)* |
    /// | `LOG_LEVEL` | `info` |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDate`] if `STACK_DATE` is not a
    /// `YYYY-MM-DD` date.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`StackConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("STACK_ID") {
            config.stack_id = v;
        }
        if let Some(v) = lookup("STACK_ENVIRONMENT") {
            config.environment = v;
        }
        if let Some(v) = lookup("STACK_REGION") {
            config.region = if v.is_empty() { None } else { Some(v) };
        }
        if let Some(v) = lookup("STACK_DATE") {
            let date = NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                .map_err(|_| ConfigError::InvalidDate { value: v.clone() })?;
            config.date = Some(date);
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }

        Ok(config)
    }

    /// The clock implied by this configuration.
    #[must_use]
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.date {
            Some(date) => {
                tracing::debug!(%date, "using pinned deployment date");
                Box::new(FixedClock::new(date))
            }
            None => Box::new(SystemClock),
        }
    }
}
