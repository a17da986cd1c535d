//! Booking entity: one reserved time interval with a professional.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::utils::time_grid::TimeRange;

/// Name of the status that frees a slot. Bookings are never deleted;
/// cancellation is a status transition.
pub const CANCELLED_STATUS: &str = "cancelled";

/// Name of the initial status assigned at creation.
pub const PENDING_STATUS: &str = "pending";

/// A booking row, with the status name joined in for display and
/// cancellation checks.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: i64,
    pub customer_id: i64,
    pub professional_id: i64,
    pub service_id: i64,
    pub booked_date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i32,
    pub status_id: i64,
    pub status_name: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// The half-open interval `[start, start + duration)` this booking occupies.
    ///
    /// Returns `None` only for corrupt rows (non-positive duration or an
    /// interval crossing midnight); such rows are skipped by callers.
    pub fn time_range(&self) -> Option<TimeRange> {
        let minutes = u32::try_from(self.duration_minutes).ok()?;
        TimeRange::from_start_and_duration(self.start_time, minutes)
    }

    /// True when this booking no longer occupies its slot.
    pub fn is_cancelled(&self) -> bool {
        self.status_name == CANCELLED_STATUS
    }
}

/// Input data for inserting a new booking.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_id: i64,
    pub professional_id: i64,
    pub service_id: i64,
    pub booked_date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_minutes: i32,
    pub status_id: i64,
    pub notes: Option<String>,
}
