//! Repository trait for availability window data access.

use crate::domain::entities::{AvailabilityWindow, NewAvailabilityWindow};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the weekly availability windows a professional
/// defines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// All windows for a professional, ordered by weekday then start time.
    async fn list_for_professional(
        &self,
        professional_id: i64,
    ) -> Result<Vec<AvailabilityWindow>, AppError>;

    /// Windows for one professional on one weekday, ordered by start time.
    async fn list_for_weekday(
        &self,
        professional_id: i64,
        weekday: i16,
    ) -> Result<Vec<AvailabilityWindow>, AppError>;

    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including check
    /// constraint violations the caller should have validated away.
    async fn create(
        &self,
        new_window: NewAvailabilityWindow,
    ) -> Result<AvailabilityWindow, AppError>;

    /// Deletes a window. Returns `Ok(false)` when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
