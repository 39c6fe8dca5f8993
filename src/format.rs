//! Display formatting for byte counts and currency amounts
//!
//! Pure presentation transforms, applied only after all numeric computation
//! has finished; matrices stay numeric right up to this step.

/// Units for human-readable sizes, smallest first
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count with the largest unit keeping the value below 1024
///
/// Values of a petabyte and beyond stay in TB.
///
/// # Examples
/// ```
/// use s3cost::format::format_size;
///
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(1073741824), "1.00 GB");
/// ```
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2} {}", SIZE_UNITS[SIZE_UNITS.len() - 1])
}

/// Render a cost as a fixed two-decimal dollar string
///
/// # Examples
/// ```
/// use s3cost::format::format_money;
///
/// assert_eq!(format_money(0.0), "$0.00");
/// assert_eq!(format_money(1.2), "$1.20");
/// ```
pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}
