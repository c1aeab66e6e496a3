//! The seam to the infrastructure provider.
//!
//! Network, compute, and load-balancer wiring live entirely with the
//! provider. This crate only hands it the validated parameters of the
//! access-log bucket.

use serde::{Deserialize, Serialize};
use stackname_core::{Environment, Region};

/// What happens to a resource when its stack is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemovalPolicy {
    /// Delete the resource with the stack.
    Destroy,
}

/// Parameters of the load balancer's access-log bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogBucketSpec {
    /// Logical id of the resource within the stack.
    pub logical_id: String,
    /// Globally unique bucket name.
    pub bucket_name: String,
    /// Deployment environment.
    pub environment: Environment,
    /// Deployment region.
    pub region: Region,
    /// Whether object versioning is enabled.
    pub versioned: bool,
    /// Whether objects are emptied out before the bucket is deleted.
    pub auto_delete_objects: bool,
    /// Teardown behavior.
    pub removal_policy: RemovalPolicy,
}

impl LogBucketSpec {
    /// Logical id given to the access-log bucket.
    pub const LOGICAL_ID: &str = "EMD-LogBucket";

    /// Access-log bucket settings for a validated name.
    #[must_use]
    pub fn new(bucket_name: impl Into<String>, environment: Environment, region: Region) -> Self {
        Self {
            logical_id: Self::LOGICAL_ID.to_owned(),
            bucket_name: bucket_name.into(),
            environment,
            region,
            versioned: true,
            auto_delete_objects: true,
            removal_policy: RemovalPolicy::Destroy,
        }
    }
}

/// An external system that turns declared resources into cloud infrastructure.
pub trait InfrastructureProvider {
    /// Declare the access-log storage bucket.
    fn declare_log_bucket(&mut self, spec: &LogBucketSpec);
}

/// Provider that records declarations in memory instead of provisioning.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RecordingProvider {
    buckets: Vec<LogBucketSpec>,
}

impl RecordingProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buckets declared so far, in declaration order.
    #[must_use]
    pub fn buckets(&self) -> &[LogBucketSpec] {
        &self.buckets
    }
}

impl InfrastructureProvider for RecordingProvider {
    fn declare_log_bucket(&mut self, spec: &LogBucketSpec) {
        tracing::debug!(
            logical_id = %spec.logical_id,
            bucket = %spec.bucket_name,
            "declared log bucket"
        );
        self.buckets.push(spec.clone());
    }
}
