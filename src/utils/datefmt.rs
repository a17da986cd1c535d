//! Parsing and formatting for the wire date/time formats.
//!
//! The API exchanges dates as `YYYY-MM-DD` and times of day as `HH:MM`.

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use thiserror::Error;

use crate::error::AppError;

/// Rejected wire-format input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireFormatError {
    #[error("Invalid date format, expected YYYY-MM-DD")]
    Date,
    #[error("Invalid time format, expected HH:MM")]
    Time,
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(WireFormatError::Date.to_string(), json!({ "date": s })))
}

/// Parses an `HH:MM` time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| AppError::bad_request(WireFormatError::Time.to_string(), json!({ "time": s })))
}

/// Formats a time of day as `HH:MM`.
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
