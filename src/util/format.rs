//! Display formatting helpers for list metadata and upload stats.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a byte count as megabytes with two decimals, e.g. `"1.25 MB"`.
pub fn format_megabytes(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// Date portion of an ISO 8601 timestamp, for resume list metadata.
pub fn format_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
