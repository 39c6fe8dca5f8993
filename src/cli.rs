//! CLI interface for s3cost
//!
//! This module defines the command-line interface using clap. A run takes a
//! date window, an output base name and the directories to read from and
//! write to.
//!
//! # Example
//!
//! ```bash
//! # Cost report for January and February 2024
//! s3cost --since 2024-01-01 --until 2024-02-29 q1-report
//!
//! # Custom inventory location and pricing table
//! s3cost --since 2024-01-01 --until 2024-01-31 jan \
//!     --data-dir ./inventories --pricing ./pricing.json
//! ```

use crate::error::{Result, S3costError};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Estimate S3 storage costs from object inventory exports
#[derive(Parser, Debug, Clone)]
#[command(name = "s3cost")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Start date of the report window (YYYY-MM-DD, inclusive, UTC)
    #[arg(long)]
    pub since: String,

    /// End date of the report window (YYYY-MM-DD, inclusive, UTC)
    #[arg(long)]
    pub until: String,

    /// Base name for the report files (".csv" appended if absent)
    pub output: String,

    /// Directory containing inventory JSONL exports
    #[arg(long, env = "S3COST_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory the report files are written into
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// JSON pricing table overriding the built-in schedule
    #[arg(long)]
    pub pricing: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Parse a report-window date
///
/// Accepts `YYYY-MM-DD` only; anything else fails fast.
///
/// # Example
///
/// ```
/// use s3cost::cli::parse_date;
/// use chrono::Datelike;
///
/// let date = parse_date("2024-01-15").unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.day(), 15);
/// assert!(parse_date("01/15/2024").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| S3costError::InvalidDate(date_str.to_string()))
}
