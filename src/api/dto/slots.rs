//! DTOs for the available-slots endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Slot;
use crate::utils::datefmt::format_time;

/// Query parameters for `GET /api/professionals/{id}/slots`.
///
/// The date stays a string here; the handler parses it so a malformed value
/// becomes a structured validation error instead of a bare 400.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

/// One candidate interval in the response.
#[derive(Debug, Serialize)]
pub struct SlotItem {
    pub start_time: String,
    pub end_time: String,
    pub available: bool,
}

impl From<&Slot> for SlotItem {
    fn from(slot: &Slot) -> Self {
        SlotItem {
            start_time: format_time(slot.start_time),
            end_time: format_time(slot.end_time),
            available: slot.available,
        }
    }
}

/// Response for the slots endpoint.
#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub professional_id: i64,
    pub date: String,
    pub slots: Vec<SlotItem>,
}
