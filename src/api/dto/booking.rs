//! DTOs for booking endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Booking;
use crate::utils::datefmt::format_time;

static TIME_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

/// Request to create a booking.
///
/// The customer is not part of the payload; it is derived from the
/// authenticated caller's user id.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(range(min = 1))]
    pub professional_id: i64,

    #[validate(range(min = 1))]
    pub service_id: i64,

    /// Calendar day, `YYYY-MM-DD`. Parsed in the handler for a structured
    /// validation error on malformed input.
    pub date: String,

    #[validate(regex(path = "*TIME_REGEX", message = "Expected HH:MM"))]
    pub time: String,

    /// Minutes; defaults to the service's duration estimate when absent.
    #[validate(range(min = 1, max = 1440))]
    pub duration_minutes: Option<i32>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// JSON representation of a booking.
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub customer_id: i64,
    pub professional_id: i64,
    pub service_id: i64,
    pub date: String,
    pub start_time: String,
    pub duration_minutes: i32,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        BookingResponse {
            id: booking.id,
            customer_id: booking.customer_id,
            professional_id: booking.professional_id,
            service_id: booking.service_id,
            date: booking.booked_date.to_string(),
            start_time: format_time(booking.start_time),
            duration_minutes: booking.duration_minutes,
            status: booking.status_name.clone(),
            notes: booking.notes.clone(),
            created_at: booking.created_at,
        }
    }
}

/// Paginated booking list response.
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub total: i64,
    pub items: Vec<BookingResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(time: &str, duration: Option<i32>) -> CreateBookingRequest {
        CreateBookingRequest {
            professional_id: 1,
            service_id: 2,
            date: "2025-07-01".to_string(),
            time: time.to_string(),
            duration_minutes: duration,
            notes: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("10:00", Some(60)).validate().is_ok());
        assert!(request("10:00", None).validate().is_ok());
    }

    #[test]
    fn test_bad_time_format_fails() {
        assert!(request("10am", Some(60)).validate().is_err());
        assert!(request("25:00", Some(60)).validate().is_err());
    }

    #[test]
    fn test_duration_out_of_range_fails() {
        assert!(request("10:00", Some(0)).validate().is_err());
        assert!(request("10:00", Some(2000)).validate().is_err());
    }
}
