//! Bucket naming, validation, and stack definition for stackname.
//!
//! # Flow
//!
//! ```text
//! StackProps (raw strings)
//!        |
//!        v
//! validate_environment / validate_region   (fail fast)
//!        |
//!        v
//! generate_bucket_name (Clock)   ->   check_bucket_name
//!        |
//!        v
//! InfrastructureProvider::declare_log_bucket
//! ```

pub mod error;
pub mod generator;
pub mod provider;
pub mod stack;
pub mod validation;

pub use error::{NamingError, NamingResult};
pub use generator::generate_bucket_name;
pub use provider::{InfrastructureProvider, LogBucketSpec, RecordingProvider, RemovalPolicy};
pub use stack::{DefinedStack, StackProps, define_stack};
pub use validation::{is_valid_bucket_name, validate_environment, validate_region};
