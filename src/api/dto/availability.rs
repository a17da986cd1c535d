//! DTOs for availability window management.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::AvailabilityWindow;
use crate::utils::datefmt::format_time;

static TIME_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

/// Request to add a weekly availability window.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWindowRequest {
    /// 0 = Sunday .. 6 = Saturday.
    #[validate(range(min = 0, max = 6))]
    pub weekday: i16,

    #[validate(regex(path = "*TIME_REGEX", message = "Expected HH:MM"))]
    pub start_time: String,

    #[validate(regex(path = "*TIME_REGEX", message = "Expected HH:MM"))]
    pub end_time: String,
}

/// JSON representation of an availability window.
#[derive(Debug, Serialize)]
pub struct WindowResponse {
    pub id: i64,
    pub professional_id: i64,
    pub weekday: i16,
    pub start_time: String,
    pub end_time: String,
}

impl From<&AvailabilityWindow> for WindowResponse {
    fn from(window: &AvailabilityWindow) -> Self {
        WindowResponse {
            id: window.id,
            professional_id: window.professional_id,
            weekday: window.weekday,
            start_time: format_time(window.start_time),
            end_time: format_time(window.end_time),
        }
    }
}
