//! Repository trait for reading the status history trail.
//!
//! History rows are written by
//! [`crate::domain::repositories::BookingRepository::transition_status`]
//! inside the transition transaction; this trait is read-only.

use crate::domain::entities::StatusHistoryEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the append-only status history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Lists history entries, newest first, optionally filtered by booking.
    async fn list(
        &self,
        booking_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StatusHistoryEntry>, AppError>;

    /// Counts entries matching the same filter as [`HistoryRepository::list`].
    async fn count(&self, booking_id: Option<i64>) -> Result<i64, AppError>;
}
