//! Output module: terminal tables and the CSV report sink
//!
//! Two presentation paths share the formatted matrices: prettytable
//! renderers for the terminal, and a [`ReportWriter`] that persists the
//! usage and cost matrices as `usage_<name>.csv` and `cost_<name>.csv`
//! inside an output directory created on demand.
//!
//! All cells pass through [`crate::format`] here; upstream the matrices are
//! purely numeric.

use crate::error::Result;
use crate::format::{format_money, format_size};
use crate::report::{CostMatrix, UsageMatrix};
use prettytable::{Cell, Row, Table, format};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render the usage matrix as a terminal table
pub fn render_usage_table(usage: &UsageMatrix) -> String {
    render_table(
        usage.months().iter().map(|m| m.to_string()).collect(),
        usage.columns().iter().map(|c| c.to_string()).collect(),
        |row, col| format_size(usage.get(row, col)),
        |row| format_size(usage.row_total(row)),
        |col| format_size(usage.column_total(col)),
        format_size(usage.grand_total()),
    )
}

/// Render the cost matrix as a terminal table
pub fn render_cost_table(cost: &CostMatrix) -> String {
    render_table(
        cost.months().iter().map(|m| m.to_string()).collect(),
        cost.columns().iter().map(|c| c.to_string()).collect(),
        |row, col| format_money(cost.get(row, col)),
        |row| format_money(cost.row_total(row)),
        |col| format_money(cost.column_total(col)),
        format_money(cost.grand_total()),
    )
}

fn render_table(
    months: Vec<String>,
    columns: Vec<String>,
    cell: impl Fn(usize, usize) -> String,
    row_total: impl Fn(usize) -> String,
    column_total: impl Fn(usize) -> String,
    grand_total: String,
) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    let mut titles = vec![Cell::new("Month").style_spec("b")];
    for column in &columns {
        titles.push(Cell::new(column).style_spec("b"));
    }
    titles.push(Cell::new("Total").style_spec("b"));
    table.set_titles(Row::new(titles));

    for (row_idx, month) in months.iter().enumerate() {
        let mut cells = vec![Cell::new(month)];
        for col_idx in 0..columns.len() {
            cells.push(Cell::new(&cell(row_idx, col_idx)).style_spec("r"));
        }
        cells.push(Cell::new(&row_total(row_idx)).style_spec("r"));
        table.add_row(Row::new(cells));
    }

    let mut totals = vec![Cell::new("Total").style_spec("b")];
    for col_idx in 0..columns.len() {
        totals.push(Cell::new(&column_total(col_idx)).style_spec("br"));
    }
    totals.push(Cell::new(&grand_total).style_spec("br"));
    table.add_row(Row::new(totals));

    table.to_string()
}

/// Persists formatted matrices as CSV files in an output directory
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting `output_dir`
    ///
    /// The directory itself is created lazily on the first write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write `usage_<name>.csv` and `cost_<name>.csv`
    ///
    /// A `.csv` suffix is appended to the base name when absent. Returns
    /// the paths of the two written files.
    pub fn write(
        &self,
        usage: &UsageMatrix,
        cost: &CostMatrix,
        base_name: &str,
    ) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(&self.output_dir)?;

        let file_name = if base_name.ends_with(".csv") {
            base_name.to_string()
        } else {
            format!("{base_name}.csv")
        };

        let usage_path = self.output_dir.join(format!("usage_{file_name}"));
        let cost_path = self.output_dir.join(format!("cost_{file_name}"));

        fs::write(&usage_path, usage_csv(usage))?;
        fs::write(&cost_path, cost_csv(cost))?;

        info!("Usage output written to {}", usage_path.display());
        info!("Cost output written to {}", cost_path.display());

        Ok((usage_path, cost_path))
    }

    /// The directory reports are written into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// CSV for the usage matrix, cells formatted as human-readable sizes
fn usage_csv(usage: &UsageMatrix) -> String {
    build_csv(
        usage.months().iter().map(|m| m.to_string()).collect(),
        usage.columns().iter().map(|c| c.to_string()).collect(),
        |row, col| format_size(usage.get(row, col)),
        |row| format_size(usage.row_total(row)),
        |col| format_size(usage.column_total(col)),
        format_size(usage.grand_total()),
    )
}

/// CSV for the cost matrix, cells formatted as currency
fn cost_csv(cost: &CostMatrix) -> String {
    build_csv(
        cost.months().iter().map(|m| m.to_string()).collect(),
        cost.columns().iter().map(|c| c.to_string()).collect(),
        |row, col| format_money(cost.get(row, col)),
        |row| format_money(cost.row_total(row)),
        |col| format_money(cost.column_total(col)),
        format_money(cost.grand_total()),
    )
}

fn build_csv(
    months: Vec<String>,
    columns: Vec<String>,
    cell: impl Fn(usize, usize) -> String,
    row_total: impl Fn(usize) -> String,
    column_total: impl Fn(usize) -> String,
    grand_total: String,
) -> String {
    let mut out = String::new();

    let mut header = vec!["Month".to_string()];
    header.extend(columns.iter().map(|c| csv_field(c)));
    header.push("Total".to_string());
    out.push_str(&header.join(","));
    out.push('\n');

    for (row_idx, month) in months.iter().enumerate() {
        let mut fields = vec![csv_field(month)];
        for col_idx in 0..columns.len() {
            fields.push(csv_field(&cell(row_idx, col_idx)));
        }
        fields.push(csv_field(&row_total(row_idx)));
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    let mut fields = vec!["Total".to_string()];
    for col_idx in 0..columns.len() {
        fields.push(csv_field(&column_total(col_idx)));
    }
    fields.push(csv_field(&grand_total));
    out.push_str(&fields.join(","));
    out.push('\n');

    out
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
