//! Cost calculator module for tiered storage pricing

use crate::pricing::PricingTable;
use crate::types::StorageClass;
use tracing::{debug, warn};

/// Bytes in one binary gigabyte (1024^3)
pub const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Converts byte quantities into monetary cost using a tiered schedule
///
/// The table is injected at construction so tests and alternate
/// deployments can supply their own schedules. Pricing is progressive:
/// usage is consumed tier by tier, each tier billing at its own rate for
/// the capacity between its ceiling and the previous one, so the first
/// 50 GB of STANDARD always costs the first-tier rate regardless of total
/// usage.
pub struct CostCalculator {
    /// Tier schedules per storage class
    pricing: PricingTable,
}

impl CostCalculator {
    /// Create a new CostCalculator around a pricing table
    pub fn new(pricing: PricingTable) -> Self {
        Self { pricing }
    }

    /// The pricing table this calculator bills against
    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    /// Calculate the cost of storing `size_bytes` in `storage_class`
    ///
    /// A class with no pricing tiers is a recoverable condition: a warning
    /// is logged and the cost is 0.0, leaving the rest of the report
    /// unaffected. Arithmetic is floating point throughout; very large
    /// sizes accumulate rounding error.
    pub fn cost(&self, size_bytes: u64, storage_class: &StorageClass) -> f64 {
        let tiers = self.pricing.tiers_for(storage_class);
        if tiers.is_empty() {
            warn!("No pricing tiers found for storage class: {storage_class}");
            return 0.0;
        }

        let mut remaining_gb = size_bytes as f64 / BYTES_PER_GB;
        let mut cost = 0.0;
        let mut previous_bound = 0.0;

        for tier in tiers {
            match tier.upper_bound_gb {
                Some(bound) => {
                    // Capacity is the span between cumulative ceilings, not
                    // the ceiling itself.
                    let capacity = bound - previous_bound;
                    if remaining_gb > capacity {
                        cost += capacity * tier.price_per_gb;
                        remaining_gb -= capacity;
                        previous_bound = bound;
                    } else {
                        cost += remaining_gb * tier.price_per_gb;
                        remaining_gb = 0.0;
                        break;
                    }
                }
                None => {
                    cost += remaining_gb * tier.price_per_gb;
                    remaining_gb = 0.0;
                    break;
                }
            }
        }

        debug!(
            "Calculated cost: ${cost:.6} for {size_bytes} bytes in {storage_class}"
        );

        cost
    }
}
