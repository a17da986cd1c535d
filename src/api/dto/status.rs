//! DTOs for status transitions and the status catalog.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::booking::BookingResponse;
use crate::api::dto::history::HistoryEntryResponse;
use crate::domain::entities::BookingStatus;

/// Request to move a booking to a new status.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(range(min = 1))]
    pub status_id: i64,
}

/// Response for a status transition: the updated booking plus the history
/// row the transition produced.
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub booking: BookingResponse,
    pub history: HistoryEntryResponse,
}

/// Request to add a status to the catalog.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStatusRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// JSON representation of a catalog status.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<&BookingStatus> for StatusResponse {
    fn from(status: &BookingStatus) -> Self {
        StatusResponse {
            id: status.id,
            name: status.name.clone(),
            description: status.description.clone(),
        }
    }
}
