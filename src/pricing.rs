//! Tiered pricing tables for storage classes
//!
//! A pricing table maps a storage class name to an ordered sequence of
//! [`PricingTier`]s. Tier bounds are cumulative ceilings: tier *i*'s bound is
//! the total number of gigabytes billable at tiers `0..=i`, so the tiers
//! partition `[0, ∞)` with no gaps and the last tier must be unbounded.
//!
//! The built-in table carries the STANDARD schedule; alternate tables can be
//! loaded from a JSON file with the same shape as `embedded/pricing.json`.

use crate::error::{Result, S3costError};
use crate::types::StorageClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Embedded default pricing table
const EMBEDDED_PRICING: &str = include_str!("../embedded/pricing.json");

/// One rate bracket of a tiered schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Cumulative ceiling in gigabytes; `None` means unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound_gb: Option<f64>,
    /// Price per gigabyte within this tier
    pub price_per_gb: f64,
}

/// Mapping from storage class name to its ordered tier schedule
///
/// Immutable after construction; the cost calculator takes a table by value
/// so tests can inject their own schedules.
///
/// # Examples
/// ```
/// use s3cost::pricing::PricingTable;
/// use s3cost::types::StorageClass;
///
/// let table = PricingTable::default();
/// let tiers = table.tiers_for(&StorageClass::new("STANDARD"));
/// assert_eq!(tiers.len(), 3);
/// assert!(table.tiers_for(&StorageClass::new("GLACIER")).is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingTable {
    classes: HashMap<String, Vec<PricingTier>>,
}

impl PricingTable {
    /// Build a table from a class → tiers mapping, validating each schedule
    pub fn new(classes: HashMap<String, Vec<PricingTier>>) -> Result<Self> {
        let table = Self { classes };
        table.validate()?;
        Ok(table)
    }

    /// Load a pricing table from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let classes: HashMap<String, Vec<PricingTier>> =
            serde_json::from_str(&contents).map_err(|e| S3costError::Parse {
                file: path.to_path_buf(),
                error: e.to_string(),
            })?;

        debug!("Loaded pricing table from {}", path.display());
        Self::new(classes)
    }

    /// Get the tier schedule for a storage class
    ///
    /// Returns an empty slice for unknown classes; the cost calculator
    /// treats that as a recoverable missing-pricing condition.
    pub fn tiers_for(&self, storage_class: &StorageClass) -> &[PricingTier] {
        self.classes
            .get(storage_class.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Storage class names known to this table
    pub fn known_classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Check every schedule: non-empty, non-negative prices, strictly
    /// ascending positive bounds, and exactly the last tier unbounded.
    fn validate(&self) -> Result<()> {
        for (class, tiers) in &self.classes {
            if tiers.is_empty() {
                return Err(S3costError::Config(format!(
                    "Pricing for class '{class}' has no tiers"
                )));
            }

            let mut previous_bound = 0.0;
            for (i, tier) in tiers.iter().enumerate() {
                if tier.price_per_gb < 0.0 {
                    return Err(S3costError::Config(format!(
                        "Pricing for class '{class}' has a negative price in tier {i}"
                    )));
                }

                let is_last = i == tiers.len() - 1;
                match tier.upper_bound_gb {
                    Some(bound) if is_last => {
                        return Err(S3costError::Config(format!(
                            "Pricing for class '{class}' must end with an unbounded tier, \
                             found ceiling {bound} GB"
                        )));
                    }
                    Some(bound) => {
                        if bound <= previous_bound {
                            return Err(S3costError::Config(format!(
                                "Pricing for class '{class}' has non-ascending ceiling in tier {i}"
                            )));
                        }
                        previous_bound = bound;
                    }
                    None if is_last => {}
                    None => {
                        return Err(S3costError::Config(format!(
                            "Pricing for class '{class}' has an unbounded tier {i} before the last"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for PricingTable {
    /// The built-in schedule: STANDARD at 0.025/GB up to 50 GB, 0.024/GB up
    /// to 500 GB, 0.023/GB beyond.
    fn default() -> Self {
        let classes = serde_json::from_str(EMBEDDED_PRICING)
            .expect("embedded pricing table must parse");
        let table = Self { classes };
        table.validate().expect("embedded pricing table must validate");
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_standard_schedule() {
        let table = PricingTable::default();
        let tiers = table.tiers_for(&StorageClass::new("STANDARD"));

        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].upper_bound_gb, Some(50.0));
        assert_eq!(tiers[0].price_per_gb, 0.025);
        assert_eq!(tiers[1].upper_bound_gb, Some(500.0));
        assert_eq!(tiers[1].price_per_gb, 0.024);
        assert_eq!(tiers[2].upper_bound_gb, None);
        assert_eq!(tiers[2].price_per_gb, 0.023);
    }

    #[test]
    fn test_unknown_class_yields_empty_schedule() {
        let table = PricingTable::default();
        assert!(table.tiers_for(&StorageClass::new("GLACIER_DEEP_UNKNOWN")).is_empty());
    }

    #[test]
    fn test_rejects_bounded_last_tier() {
        let mut classes = HashMap::new();
        classes.insert(
            "STANDARD".to_string(),
            vec![PricingTier {
                upper_bound_gb: Some(50.0),
                price_per_gb: 0.025,
            }],
        );

        assert!(matches!(
            PricingTable::new(classes),
            Err(S3costError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_non_ascending_bounds() {
        let mut classes = HashMap::new();
        classes.insert(
            "STANDARD".to_string(),
            vec![
                PricingTier {
                    upper_bound_gb: Some(500.0),
                    price_per_gb: 0.025,
                },
                PricingTier {
                    upper_bound_gb: Some(50.0),
                    price_per_gb: 0.024,
                },
                PricingTier {
                    upper_bound_gb: None,
                    price_per_gb: 0.023,
                },
            ],
        );

        assert!(matches!(
            PricingTable::new(classes),
            Err(S3costError::Config(_))
        ));
    }

    #[test]
    fn test_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing.json");
        std::fs::write(
            &path,
            r#"{"ARCHIVE": [{"upper_bound_gb": 10, "price_per_gb": 0.01}, {"price_per_gb": 0.005}]}"#,
        )
        .unwrap();

        let table = PricingTable::from_file(&path).unwrap();
        let tiers = table.tiers_for(&StorageClass::new("ARCHIVE"));
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[1].price_per_gb, 0.005);
    }

    #[test]
    fn test_from_file_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pricing.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            PricingTable::from_file(&path),
            Err(S3costError::Parse { .. })
        ));
    }
}
