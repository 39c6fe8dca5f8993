//! s3cost - Estimate S3 storage costs from object inventory exports
//!
//! This library provides functionality to:
//! - Load per-object observations from JSONL inventory exports
//! - Aggregate object sizes by bucket, calendar month and storage class
//! - Apply a tiered, progressive pricing model to the aggregated usage
//! - Render usage and cost matrices as terminal tables and CSV files
//!
//! # Examples
//!
//! ```no_run
//! use s3cost::{
//!     aggregation::Aggregator,
//!     cost_calculator::CostCalculator,
//!     data_loader::InventoryLoader,
//!     filters::DateRange,
//!     pricing::PricingTable,
//!     report::ReportBuilder,
//! };
//! use chrono::NaiveDate;
//!
//! fn main() -> s3cost::Result<()> {
//!     let range = DateRange::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
//!     );
//!
//!     let loader = InventoryLoader::new("./inventories")?;
//!     let observations = loader.load_observations(&range)?;
//!
//!     let rows = Aggregator::aggregate(observations);
//!     let calculator = CostCalculator::new(PricingTable::default());
//!     let (usage, cost) = ReportBuilder::build(&rows, &calculator);
//!
//!     println!("total: {} bytes, ${:.2}", usage.grand_total(), cost.grand_total());
//!     Ok(())
//! }
//! ```

pub mod aggregation;
pub mod cli;
pub mod cost_calculator;
pub mod data_loader;
pub mod error;
pub mod filters;
pub mod format;
pub mod output;
pub mod pricing;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{Result, S3costError};
pub use types::{
    AggregatedRow, BucketName, MonthKey, Observation, STORAGE_CLASS_DEFAULT, StorageClass,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
