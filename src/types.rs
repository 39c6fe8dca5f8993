//! Core domain types for s3cost
//!
//! This module contains the fundamental types used throughout the s3cost
//! library. These types provide strong typing for common concepts like bucket
//! names, storage classes and month keys.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage class assumed when an object has none recorded.
pub const STORAGE_CLASS_DEFAULT: &str = "STANDARD";

/// Strongly-typed bucket name wrapper
///
/// Ensures bucket names are consistently handled throughout the application
/// and provides type safety when working with bucket identifiers.
///
/// # Examples
/// ```
/// use s3cost::types::BucketName;
///
/// let bucket = BucketName::new("media-archive");
/// assert_eq!(bucket.as_str(), "media-archive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BucketName(String);

impl BucketName {
    /// Create a new BucketName from any string-like type
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strongly-typed storage class name
///
/// A named billing category for stored data (e.g. "STANDARD",
/// "STANDARD_IA"). The default is [`STORAGE_CLASS_DEFAULT`], applied at the
/// observation-construction boundary rather than scattered through
/// aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StorageClass(String);

impl StorageClass {
    /// Create a new StorageClass
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StorageClass {
    fn default() -> Self {
        Self(STORAGE_CLASS_DEFAULT.to_string())
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for StorageClass {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Calendar month key for aggregation
///
/// A timestamp truncated to its UTC year and month. Orders chronologically,
/// displays as `YYYY-MM`.
///
/// # Examples
/// ```
/// use s3cost::types::MonthKey;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// let month = MonthKey::from_timestamp(&ts);
/// assert_eq!(month.to_string(), "2024-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
}

impl MonthKey {
    /// Create a new MonthKey
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Truncate a UTC timestamp to its year and month
    pub fn from_timestamp(ts: &DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One raw record of a stored object at listing time
///
/// Produced by the inventory loader, consumed once by the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Bucket the object lives in
    pub bucket: BucketName,
    /// Last-modified timestamp, UTC
    pub timestamp: DateTime<Utc>,
    /// Object size in bytes
    pub size_bytes: u64,
    /// Storage class of the object
    pub storage_class: StorageClass,
}

/// Summed usage for one (bucket, month, storage class) combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedRow {
    /// Bucket the usage belongs to
    pub bucket: BucketName,
    /// Month of the usage
    pub month: MonthKey,
    /// Storage class of the usage
    pub storage_class: StorageClass,
    /// Sum of all matching observation sizes in bytes
    pub total_size_bytes: u64,
}
