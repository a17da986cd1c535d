//! Weekly availability windows and derived bookable slots.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::utils::time_grid::TimeRange;

/// A recurring weekly availability window owned by a professional.
///
/// `weekday` follows the 0 = Sunday .. 6 = Saturday convention used by the
/// database check constraint.
#[derive(Debug, Clone)]
pub struct AvailabilityWindow {
    pub id: i64,
    pub professional_id: i64,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl AvailabilityWindow {
    /// The window as a half-open range. `None` for corrupt rows
    /// (start >= end), which the check constraint should prevent.
    pub fn time_range(&self) -> Option<TimeRange> {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// Input data for creating an availability window.
#[derive(Debug, Clone)]
pub struct NewAvailabilityWindow {
    pub professional_id: i64,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Maps a calendar date to the weekday numbering stored in
/// `availability_windows.weekday`.
pub fn weekday_of(date: NaiveDate) -> i16 {
    date.weekday().num_days_from_sunday() as i16
}

/// One candidate interval produced by the availability calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available: bool,
}
