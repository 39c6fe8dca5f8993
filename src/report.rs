//! Report builder: cross-tabulates aggregated usage into dense matrices
//!
//! Long-form aggregated rows are pivoted into a two-dimensional grid with
//! one row per month and one column per (bucket, storage class) pair, plus
//! synthetic Total rows and columns. The pivot is an explicit two-pass
//! algorithm: pass one collects the distinct row and column keys into
//! ordered sets, pass two allocates a dense grid and fills it, defaulting
//! absent combinations to zero.
//!
//! The cost matrix has the same shape as the usage matrix. Each non-Total
//! cell is the tiered cost of the corresponding usage cell; Total cells are
//! sums of those already-converted costs. Because tiered pricing is
//! progressive, summing per-cell costs is not the same as re-tiering the
//! summed usage from zero. The summed form is what gets reported.

use crate::cost_calculator::CostCalculator;
use crate::types::{AggregatedRow, BucketName, MonthKey, StorageClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Column identity in the pivoted matrices: one bucket in one storage class
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnKey {
    /// Bucket of the column
    pub bucket: BucketName,
    /// Storage class of the column
    pub storage_class: StorageClass,
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.storage_class)
    }
}

/// Monthly usage per (bucket, storage class) pair, in bytes
///
/// Fully populated: every month × column cell exists, absent combinations
/// hold zero. Total values always equal the sum of their constituents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageMatrix {
    months: Vec<MonthKey>,
    columns: Vec<ColumnKey>,
    /// Row-major cells, `months.len()` × `columns.len()`
    cells: Vec<Vec<u64>>,
    row_totals: Vec<u64>,
    column_totals: Vec<u64>,
    grand_total: u64,
}

impl UsageMatrix {
    /// Months present, ascending
    pub fn months(&self) -> &[MonthKey] {
        &self.months
    }

    /// Columns present, ordered by (bucket, storage class)
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Usage in bytes at (month index, column index)
    pub fn get(&self, month_idx: usize, column_idx: usize) -> u64 {
        self.cells[month_idx][column_idx]
    }

    /// Sum across all columns for one month
    pub fn row_total(&self, month_idx: usize) -> u64 {
        self.row_totals[month_idx]
    }

    /// Sum across all months for one column
    pub fn column_total(&self, column_idx: usize) -> u64 {
        self.column_totals[column_idx]
    }

    /// Sum of every cell
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }
}

/// Monthly cost per (bucket, storage class) pair, in currency units
///
/// Same shape as [`UsageMatrix`]; Total values are sums of per-cell costs,
/// never re-tiered aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostMatrix {
    months: Vec<MonthKey>,
    columns: Vec<ColumnKey>,
    cells: Vec<Vec<f64>>,
    row_totals: Vec<f64>,
    column_totals: Vec<f64>,
    grand_total: f64,
}

impl CostMatrix {
    /// Months present, ascending
    pub fn months(&self) -> &[MonthKey] {
        &self.months
    }

    /// Columns present, ordered by (bucket, storage class)
    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Cost at (month index, column index)
    pub fn get(&self, month_idx: usize, column_idx: usize) -> f64 {
        self.cells[month_idx][column_idx]
    }

    /// Sum across all columns for one month
    pub fn row_total(&self, month_idx: usize) -> f64 {
        self.row_totals[month_idx]
    }

    /// Sum across all months for one column
    pub fn column_total(&self, column_idx: usize) -> f64 {
        self.column_totals[column_idx]
    }

    /// Sum of every cell
    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }
}

/// Builds the usage and cost matrices from aggregated rows
pub struct ReportBuilder;

impl ReportBuilder {
    /// Pivot aggregated rows and derive the parallel cost matrix
    ///
    /// A column whose storage class has no pricing tiers costs zero in
    /// every cell without aborting the rest of the report.
    pub fn build(rows: &[AggregatedRow], calculator: &CostCalculator) -> (UsageMatrix, CostMatrix) {
        // Pass 1: ordered key sets
        let months: Vec<MonthKey> = rows.iter().map(|r| r.month).collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let columns: Vec<ColumnKey> = rows
            .iter()
            .map(|r| ColumnKey {
                bucket: r.bucket.clone(),
                storage_class: r.storage_class.clone(),
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        debug!(
            "Pivoting {} rows into {} months x {} columns",
            rows.len(),
            months.len(),
            columns.len()
        );

        // Pass 2: dense grid, absent combinations default to zero
        let mut cells = vec![vec![0u64; columns.len()]; months.len()];
        for row in rows {
            let month_idx = months
                .binary_search(&row.month)
                .expect("month key collected in pass 1");
            let column_idx = columns
                .binary_search_by(|c| {
                    (&c.bucket, &c.storage_class).cmp(&(&row.bucket, &row.storage_class))
                })
                .expect("column key collected in pass 1");
            cells[month_idx][column_idx] += row.total_size_bytes;
        }

        let row_totals: Vec<u64> = cells.iter().map(|r| r.iter().sum()).collect();
        let column_totals: Vec<u64> = (0..columns.len())
            .map(|c| cells.iter().map(|r| r[c]).sum())
            .collect();
        let grand_total = row_totals.iter().sum();

        // Cost cells convert usage per cell; cost totals sum converted
        // costs rather than pricing the summed usage.
        let cost_cells: Vec<Vec<f64>> = cells
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&columns)
                    .map(|(&usage, column)| calculator.cost(usage, &column.storage_class))
                    .collect()
            })
            .collect();

        let cost_row_totals: Vec<f64> = cost_cells.iter().map(|r| r.iter().sum()).collect();
        let cost_column_totals: Vec<f64> = (0..columns.len())
            .map(|c| cost_cells.iter().map(|r| r[c]).sum())
            .collect();
        let cost_grand_total = cost_row_totals.iter().sum();

        let usage = UsageMatrix {
            months: months.clone(),
            columns: columns.clone(),
            cells,
            row_totals,
            column_totals,
            grand_total,
        };
        let cost = CostMatrix {
            months,
            columns,
            cells: cost_cells,
            row_totals: cost_row_totals,
            column_totals: cost_column_totals,
            grand_total: cost_grand_total,
        };

        (usage, cost)
    }
}
