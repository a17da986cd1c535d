//! Repository trait for booking data access.

use crate::domain::entities::{Booking, NewBooking, StatusHistoryEntry};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for bookings.
///
/// Bookings are never physically deleted; cancellation is a status
/// transition recorded through [`BookingRepository::transition_status`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a new booking.
    ///
    /// The implementation must guarantee the non-overlap invariant against
    /// concurrent writers: the conflict check and the insert run inside one
    /// SERIALIZABLE transaction, and a losing writer gets
    /// [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the requested interval overlaps a
    /// non-cancelled booking for the same professional and date.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError>;

    /// Finds a booking by id, with its status name joined in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, AppError>;

    /// All bookings for a professional on one date, cancelled included,
    /// ordered by start time. Callers filter cancelled rows themselves.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_professional_on(
        &self,
        professional_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, AppError>;

    /// Lists bookings with optional filters and pagination, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        professional_id: Option<i64>,
        date: Option<NaiveDate>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, AppError>;

    /// Counts bookings matching the same filters as [`BookingRepository::list`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(
        &self,
        professional_id: Option<i64>,
        date: Option<NaiveDate>,
    ) -> Result<i64, AppError>;

    /// Moves a booking to a new status and appends one history row.
    ///
    /// The status update and the history insert are one transaction: both
    /// succeed or neither does, and the history row's `old_status` is read
    /// inside that transaction so it always equals the status the booking
    /// held immediately before the call.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the booking or the status id does
    /// not exist. Returns [`AppError::Internal`] on database errors; the
    /// booking status is unchanged in that case.
    async fn transition_status(
        &self,
        booking_id: i64,
        new_status_id: i64,
        changed_by: Option<i64>,
    ) -> Result<(Booking, StatusHistoryEntry), AppError>;
}
