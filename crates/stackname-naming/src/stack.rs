//! Stack definition.
//!
//! Runs the configuration guards, names the access-log bucket, and declares
//! it through an [`InfrastructureProvider`].

use serde::{Deserialize, Serialize};
use stackname_core::{Clock, Environment, Region, StackConfig};

use crate::error::NamingResult;
use crate::generator::generate_bucket_name;
use crate::provider::{InfrastructureProvider, LogBucketSpec};
use crate::validation::{check_bucket_name, validate_environment, validate_region};

/// Unvalidated stack parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackProps {
    /// Stack identifier.
    pub stack_id: String,
    /// Environment tag, as configured.
    pub environment: String,
    /// Region tag, as configured.
    pub region: Option<String>,
}

impl StackProps {
    /// Create stack props.
    #[must_use]
    pub fn new(
        stack_id: impl Into<String>,
        environment: impl Into<String>,
        region: Option<String>,
    ) -> Self {
        Self {
            stack_id: stack_id.into(),
            environment: environment.into(),
            region,
        }
    }
}

impl From<&StackConfig> for StackProps {
    fn from(config: &StackConfig) -> Self {
        Self::new(
            config.stack_id.clone(),
            config.environment.clone(),
            config.region.clone(),
        )
    }
}

/// A stack whose parameters passed every guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinedStack {
    /// Stack identifier.
    pub stack_id: String,
    /// Validated environment.
    pub environment: Environment,
    /// Validated region.
    pub region: Region,
    /// Name handed to the provider for the access-log bucket.
    pub bucket_name: String,
}

/// Validate `props`, name the log bucket, and declare it with `provider`.
///
/// Nothing is declared unless every check passes.
///
/// # Errors
///
/// Returns [`NamingError::Config`](crate::NamingError::Config) when the
/// environment or region is not allowed, or
/// [`NamingError::InvalidBucketName`](crate::NamingError::InvalidBucketName)
/// if the generated name breaks the storage-naming grammar.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use stackname_core::FixedClock;
/// use stackname_naming::{RecordingProvider, StackProps, define_stack};
///
/// let props = StackProps::new("EMD-CaseStudy", "test", Some("eu-west-3".to_owned()));
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
/// let mut provider = RecordingProvider::new();
///
/// let stack = define_stack(&props, &clock, &mut provider).unwrap();
/// assert_eq!(stack.bucket_name, "test-eu-west-3-2024-03-07");
/// assert_eq!(provider.buckets().len(), 1);
/// ```
pub fn define_stack(
    props: &StackProps,
    clock: &dyn Clock,
    provider: &mut dyn InfrastructureProvider,
) -> NamingResult<DefinedStack> {
    let environment = validate_environment(&props.environment)?;
    let region = validate_region(props.region.as_deref())?;

    let bucket_name = generate_bucket_name(environment, region, clock);
    check_bucket_name(&bucket_name)?;

    provider.declare_log_bucket(&LogBucketSpec::new(
        bucket_name.clone(),
        environment,
        region,
    ));

    tracing::info!(
        stack_id = %props.stack_id,
        %environment,
        %region,
        bucket = %bucket_name,
        "defined stack"
    );

    Ok(DefinedStack {
        stack_id: props.stack_id.clone(),
        environment,
        region,
        bucket_name,
    })
}
