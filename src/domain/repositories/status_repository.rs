//! Repository trait for the booking status catalog.

use crate::domain::entities::{BookingStatus, NewBookingStatus};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the data-driven status catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// All statuses, ordered by id.
    async fn list(&self) -> Result<Vec<BookingStatus>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<BookingStatus>, AppError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<BookingStatus>, AppError>;

    /// Creates a status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the name is already taken.
    async fn create(&self, new_status: NewBookingStatus) -> Result<BookingStatus, AppError>;

    /// Deletes a status. Returns `Ok(false)` when no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when any booking still references the
    /// status (foreign key RESTRICT).
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
