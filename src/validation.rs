//! Validation helpers for command-line input
//!
//! This module contains date parsing and range checks for the view commands.

use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;

/// Parse a date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        anyhow!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        )
    })
}

/// Parse an inclusive date range and check that it is not reversed
///
/// # Arguments
/// * `from` - First day of the range
/// * `to` - Last day of the range
pub fn parse_date_range(from: &str, to: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start = parse_date(from)?;
    let end = parse_date(to)?;
    if end < start {
        bail!("Invalid range: {} is before {}", end, start);
    }
    Ok((start, end))
}

/// Normalize an id argument by trimming surrounding whitespace
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}
