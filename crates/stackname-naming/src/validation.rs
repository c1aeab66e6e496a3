//! Validation for deployment parameters and bucket names.
//!
//! The environment and region guards are hard failures: a misconfigured
//! stack must not reach the provider. The bucket-name check is advisory and
//! only reports a verdict.

use std::sync::LazyLock;

use regex::Regex;
use stackname_core::{ConfigError, ConfigResult, Environment, Region};

use crate::error::{NamingError, NamingResult};

/// Minimum bucket name length.
const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum bucket name length.
const MAX_BUCKET_NAME_LEN: usize = 63;

/// Four groups of 1-3 digits separated by dots. Syntactic only, octets are
/// not range checked.
static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").expect("dotted quad pattern is valid")
});

/// Check an environment tag against the allow-list.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvironment`] carrying the rejected value
/// and the full allow-list.
///
/// # Examples
///
/// ```
/// use stackname_core::Environment;
/// use stackname_naming::validation::validate_environment;
///
/// assert_eq!(validate_environment("staging").unwrap(), Environment::Staging);
/// assert!(validate_environment("qa").is_err());
/// ```
pub fn validate_environment(environment: &str) -> ConfigResult<Environment> {
    environment.parse().inspect_err(|e| {
        tracing::warn!(environment, error = %e, "rejected environment");
    })
}

/// Check a region tag against the allow-list. A missing region is rejected.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidRegion`] carrying the rejected value (or
/// `None` when absent) and the full allow-list.
///
/// # Examples
///
/// ```
/// use stackname_core::Region;
/// use stackname_naming::validation::validate_region;
///
/// assert_eq!(validate_region(Some("eu-west-3")).unwrap(), Region::EuWest3);
/// assert!(validate_region(None).is_err());
/// ```
pub fn validate_region(region: Option<&str>) -> ConfigResult<Region> {
    let Some(region) = region else {
        tracing::warn!("rejected absent region");
        return Err(ConfigError::InvalidRegion {
            value: None,
            allowed: Region::allowed(),
        });
    };

    region.parse().inspect_err(|e| {
        tracing::warn!(region, error = %e, "rejected region");
    })
}

/// Check a bucket name against the storage-naming grammar.
///
/// Rules, checked in order:
/// - 3-63 characters long
/// - Only lowercase letters, numbers, hyphens, and dots, starting and ending
///   with a letter or number
/// - Not shaped like an IPv4 address (e.g. `192.168.0.1`)
///
/// # Errors
///
/// Returns [`NamingError::InvalidBucketName`] naming the first rule violated.
pub fn check_bucket_name(name: &str) -> NamingResult<()> {
    let len = name.len();

    if !(MIN_BUCKET_NAME_LEN..=MAX_BUCKET_NAME_LEN).contains(&len) {
        return Err(invalid(
            name,
            format!(
                "must be between {MIN_BUCKET_NAME_LEN} and {MAX_BUCKET_NAME_LEN} characters long"
            ),
        ));
    }

    if !name
        .bytes()
        .all(|b| is_edge_byte(b) || b == b'-' || b == b'.')
    {
        return Err(invalid(
            name,
            "must only contain lowercase letters, numbers, hyphens, and dots",
        ));
    }

    let bytes = name.as_bytes();
    if !is_edge_byte(bytes[0]) || !is_edge_byte(bytes[len - 1]) {
        return Err(invalid(name, "must start and end with a letter or number"));
    }

    if DOTTED_QUAD.is_match(name) {
        return Err(invalid(name, "must not be formatted as an IP address"));
    }

    Ok(())
}

/// Whether `name` satisfies the storage-naming grammar.
///
/// Never fails; see [`check_bucket_name`] for the reason behind a `false`.
///
/// # Examples
///
/// ```
/// use stackname_naming::validation::is_valid_bucket_name;
///
/// assert!(is_valid_bucket_name("test-eu-west-3-2024-03-07"));
/// assert!(!is_valid_bucket_name("192.168.1.1"));
/// ```
#[must_use]
pub fn is_valid_bucket_name(name: &str) -> bool {
    check_bucket_name(name).is_ok()
}

fn is_edge_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

fn invalid(name: &str, reason: impl Into<String>) -> NamingError {
    NamingError::InvalidBucketName {
        name: name.to_owned(),
        reason: reason.into(),
    }
}
