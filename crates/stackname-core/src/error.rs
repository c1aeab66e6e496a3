//! Error types for deployment configuration.

/// Configuration error raised when a deployment parameter is outside its allow-list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Environment tag is not one of the supported stages.
    #[error("invalid environment: {value} (must be one of {allowed})")]
    InvalidEnvironment {
        /// The rejected value.
        value: String,
        /// The full allow-list, comma separated.
        allowed: String,
    },

    /// Region tag is absent or not one of the supported regions.
    #[error("invalid region: {} (must be one of {allowed})", display_value(.value.as_deref()))]
    InvalidRegion {
        /// The rejected value, `None` when no region was supplied.
        value: Option<String>,
        /// The full allow-list, comma separated.
        allowed: String,
    },

    /// A pinned deployment date could not be parsed.
    #[error("invalid date: {value} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The rejected value.
        value: String,
    },
}

fn display_value(value: Option<&str>) -> &str {
    value.unwrap_or("<absent>")
}

/// Convenience result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
