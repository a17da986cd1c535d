//! DTOs for the status history endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::StatusHistoryEntry;

/// JSON representation of one status transition.
#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    pub id: i64,
    pub booking_id: i64,
    pub old_status: String,
    pub new_status: String,
    pub changed_by: Option<i64>,
    pub changed_at: DateTime<Utc>,
}

impl From<&StatusHistoryEntry> for HistoryEntryResponse {
    fn from(entry: &StatusHistoryEntry) -> Self {
        HistoryEntryResponse {
            id: entry.id,
            booking_id: entry.booking_id,
            old_status: entry.old_status.clone(),
            new_status: entry.new_status.clone(),
            changed_by: entry.changed_by,
            changed_at: entry.changed_at,
        }
    }
}

/// Paginated history list response.
#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub total: i64,
    pub items: Vec<HistoryEntryResponse>,
}
