//! Deployment environment and region tags.
//!
//! Both tags are closed sets: a raw string either names one of the known
//! variants or is rejected with the matching [`ConfigError`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Logical deployment stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Developer sandboxes.
    #[default]
    Development,
    /// Automated test runs.
    Test,
    /// Pre-production.
    Staging,
    /// Live traffic.
    Production,
}

impl Environment {
    /// Every supported environment, in allow-list order.
    pub const ALL: [Self; 4] = [
        Self::Development,
        Self::Test,
        Self::Staging,
        Self::Production,
    ];

    /// Get the environment tag as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    /// The allow-list rendered for error messages (`"development, test, ..."`).
    #[must_use]
    pub fn allowed() -> String {
        join_tags(Self::ALL.iter().map(|e| e.as_str()))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidEnvironment {
                value: other.to_owned(),
                allowed: Self::allowed(),
            }),
        }
    }
}

/// Supported AWS region codes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// N. Virginia.
    #[default]
    #[serde(rename = "us-east-1")]
    UsEast1,
    /// Ohio.
    #[serde(rename = "us-east-2")]
    UsEast2,
    /// N. California.
    #[serde(rename = "us-west-1")]
    UsWest1,
    /// Oregon.
    #[serde(rename = "us-west-2")]
    UsWest2,
    /// Ireland.
    #[serde(rename = "eu-west-1")]
    EuWest1,
    /// London.
    #[serde(rename = "eu-west-2")]
    EuWest2,
    /// Paris.
    #[serde(rename = "eu-west-3")]
    EuWest3,
}

impl Region {
    /// Every supported region, in allow-list order.
    pub const ALL: [Self; 7] = [
        Self::UsEast1,
        Self::UsEast2,
        Self::UsWest1,
        Self::UsWest2,
        Self::EuWest1,
        Self::EuWest2,
        Self::EuWest3,
    ];

    /// Get the region code as a string slice.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UsEast1 => "us-east-1",
            Self::UsEast2 => "us-east-2",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
            Self::EuWest1 => "eu-west-1",
            Self::EuWest2 => "eu-west-2",
            Self::EuWest3 => "eu-west-3",
        }
    }

    /// The allow-list rendered for error messages.
    #[must_use]
    pub fn allowed() -> String {
        join_tags(Self::ALL.iter().map(|r| r.as_str()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us-east-1" => Ok(Self::UsEast1),
            "us-east-2" => Ok(Self::UsEast2),
            "us-west-1" => Ok(Self::UsWest1),
            "us-west-2" => Ok(Self::UsWest2),
            "eu-west-1" => Ok(Self::EuWest1),
            "eu-west-2" => Ok(Self::EuWest2),
            "eu-west-3" => Ok(Self::EuWest3),
            other => Err(ConfigError::InvalidRegion {
                value: Some(other.to_owned()),
                allowed: Self::allowed(),
            }),
        }
    }
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a str>) -> String {
    tags.collect::<Vec<_>>().join(", ")
}
