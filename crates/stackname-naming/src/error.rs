//! Naming-layer error types.

use stackname_core::ConfigError;

/// Error raised while naming or defining a stack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// A bucket name breaks the storage-naming grammar.
    #[error("invalid bucket name: {name} ({reason})")]
    InvalidBucketName {
        /// The rejected name.
        name: String,
        /// Which rule it broke.
        reason: String,
    },

    /// A deployment parameter failed its allow-list check.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience result type for naming operations.
pub type NamingResult<T> = Result<T, NamingError>;
