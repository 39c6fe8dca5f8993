//! Aggregation module for summarizing object observations
//!
//! This module folds raw per-object observations into one row per distinct
//! (bucket, month, storage class) combination. The aggregator is a pure
//! function over an already-materialized input sequence; the report builder
//! re-sorts downstream, so output order carries no meaning beyond being
//! deterministic.

use crate::types::{AggregatedRow, BucketName, MonthKey, Observation, StorageClass};
use std::collections::BTreeMap;
use tracing::debug;

/// Groups observations and sums their sizes
pub struct Aggregator;

impl Aggregator {
    /// Aggregate observations by (bucket, month, storage class)
    ///
    /// Empty input yields an empty output; callers treat that as "no data
    /// in range" and skip report generation entirely.
    ///
    /// # Examples
    /// ```
    /// use s3cost::aggregation::Aggregator;
    /// use s3cost::types::{BucketName, Observation, StorageClass};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let obs = Observation {
    ///     bucket: BucketName::new("a"),
    ///     timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
    ///     size_bytes: 1024,
    ///     storage_class: StorageClass::default(),
    /// };
    /// let rows = Aggregator::aggregate(vec![obs.clone(), obs]);
    /// assert_eq!(rows.len(), 1);
    /// assert_eq!(rows[0].total_size_bytes, 2048);
    /// ```
    pub fn aggregate(observations: impl IntoIterator<Item = Observation>) -> Vec<AggregatedRow> {
        let mut groups: BTreeMap<(BucketName, MonthKey, StorageClass), u64> = BTreeMap::new();

        let mut count = 0usize;
        for obs in observations {
            count += 1;
            let key = (
                obs.bucket,
                MonthKey::from_timestamp(&obs.timestamp),
                obs.storage_class,
            );
            *groups.entry(key).or_insert(0) += obs.size_bytes;
        }

        debug!("Aggregated {count} observations into {} rows", groups.len());

        groups
            .into_iter()
            .map(|((bucket, month, storage_class), total_size_bytes)| AggregatedRow {
                bucket,
                month,
                storage_class,
                total_size_bytes,
            })
            .collect()
    }
}
