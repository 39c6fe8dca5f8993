//! Date-range filtering for observations
//!
//! The report window is a pair of UTC calendar dates, inclusive on both
//! ends: an observation whose last-modified timestamp falls anywhere on the
//! end date is still in range.

use crate::types::Observation;
use chrono::NaiveDate;

/// Inclusive UTC date range for a report run
///
/// # Examples
/// ```
/// use s3cost::filters::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date, inclusive
    pub since: NaiveDate,
    /// End date, inclusive
    pub until: NaiveDate,
}

impl DateRange {
    /// Create a new range
    pub fn new(since: NaiveDate, until: NaiveDate) -> Self {
        Self { since, until }
    }

    /// Check whether an observation falls within the range
    pub fn matches(&self, observation: &Observation) -> bool {
        let date = observation.timestamp.date_naive();
        date >= self.since && date <= self.until
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BucketName, StorageClass};
    use chrono::{TimeZone, Utc};

    fn obs_at(y: i32, m: u32, d: u32, h: u32) -> Observation {
        Observation {
            bucket: BucketName::new("a"),
            timestamp: Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap(),
            size_bytes: 1,
            storage_class: StorageClass::default(),
        }
    }

    fn january() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let range = january();

        assert!(range.matches(&obs_at(2024, 1, 1, 0)));
        assert!(range.matches(&obs_at(2024, 1, 15, 12)));
        // Late on the end date still counts
        assert!(range.matches(&obs_at(2024, 1, 31, 23)));
    }

    #[test]
    fn test_out_of_range_observations_rejected() {
        let range = january();

        assert!(!range.matches(&obs_at(2023, 12, 31, 23)));
        assert!(!range.matches(&obs_at(2024, 2, 1, 0)));
    }
}
