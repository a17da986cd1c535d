//! Append-only record of booking status transitions.

use chrono::{DateTime, Utc};

/// One status transition of one booking.
///
/// Rows are written exactly once per transition, inside the same transaction
/// that updates the booking, and are never mutated or deleted afterwards.
/// Status names are denormalized so the trail survives catalog edits.
#[derive(Debug, Clone)]
pub struct StatusHistoryEntry {
    pub id: i64,
    pub booking_id: i64,
    pub old_status: String,
    pub new_status: String,
    pub changed_by: Option<i64>,
    pub changed_at: DateTime<Utc>,
}
