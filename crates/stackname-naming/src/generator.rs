//! Bucket name generation.
//!
//! Names have the shape `{environment}-{region}-{YYYY-MM-DD}`. Inputs are
//! assumed to be validated already. Uniqueness only goes down to the day:
//! two stacks for the same environment and region defined on the same date
//! get the same name.

use chrono::{Datelike, NaiveDate};
use stackname_core::{Clock, Environment, Region};

/// Render a date as `YYYY-MM-DD` with zero-padded month and day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use stackname_naming::generator::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(format_date(date), "2024-03-07");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Build the bucket name for `environment` and `region` on `date`.
#[must_use]
pub fn generate_bucket_name_for_date(
    environment: Environment,
    region: Region,
    date: NaiveDate,
) -> String {
    format!("{environment}-{region}-{}", format_date(date))
}

/// Build the bucket name for `environment` and `region` on today's date as
/// reported by `clock`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use stackname_core::{Environment, FixedClock, Region};
/// use stackname_naming::generator::generate_bucket_name;
///
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
/// assert_eq!(
///     generate_bucket_name(Environment::Test, Region::EuWest3, &clock),
///     "test-eu-west-3-2024-03-07"
/// );
/// ```
#[must_use]
pub fn generate_bucket_name(environment: Environment, region: Region, clock: &dyn Clock) -> String {
    let name = generate_bucket_name_for_date(environment, region, clock.today());
    tracing::debug!(%environment, %region, bucket = %name, "generated bucket name");
    name
}
