//! Status transitions, history reads, and status catalog management.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use crate::domain::booking_event::BookingEvent;
use crate::domain::entities::{Booking, BookingStatus, NewBookingStatus, StatusHistoryEntry};
use crate::domain::repositories::{BookingRepository, HistoryRepository, StatusRepository};
use crate::error::AppError;

/// Service applying status transitions and serving the audit trail.
///
/// The transition graph is deliberately permissive: any existing status can
/// move to any other existing status. The status set is data, not code, so
/// hard-coding an edge graph here would fight the catalog.
pub struct StatusService<B, S, H>
where
    B: BookingRepository,
    S: StatusRepository,
    H: HistoryRepository,
{
    booking_repository: Arc<B>,
    status_repository: Arc<S>,
    history_repository: Arc<H>,
    notify_tx: mpsc::Sender<BookingEvent>,
}

impl<B, S, H> StatusService<B, S, H>
where
    B: BookingRepository,
    S: StatusRepository,
    H: HistoryRepository,
{
    /// Creates a new status service.
    pub fn new(
        booking_repository: Arc<B>,
        status_repository: Arc<S>,
        history_repository: Arc<H>,
        notify_tx: mpsc::Sender<BookingEvent>,
    ) -> Self {
        Self {
            booking_repository,
            status_repository,
            history_repository,
            notify_tx,
        }
    }

    /// Moves a booking to a new status and records the transition.
    ///
    /// The booking update and the history insert are one transaction inside
    /// [`BookingRepository::transition_status`]; on failure the booking's
    /// status is unchanged and no history row exists. Exactly one history
    /// row is produced per successful call, with `old_status` equal to the
    /// status the booking held immediately before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the booking or the status id does
    /// not exist; [`AppError::Internal`] on transactional failure.
    pub async fn update_booking_status(
        &self,
        booking_id: i64,
        new_status_id: i64,
        acting_user_id: Option<i64>,
    ) -> Result<(Booking, StatusHistoryEntry), AppError> {
        // Eager checks for descriptive errors; the repository re-verifies
        // both references inside the transaction.
        self.booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Booking not found", json!({ "booking_id": booking_id }))
            })?;

        self.status_repository
            .find_by_id(new_status_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Booking status not found",
                    json!({ "status_id": new_status_id }),
                )
            })?;

        let (booking, entry) = self
            .booking_repository
            .transition_status(booking_id, new_status_id, acting_user_id)
            .await?;

        let event =
            BookingEvent::status_changed(booking.id, entry.old_status.clone(), entry.new_status.clone());
        if let Err(e) = self.notify_tx.try_send(event) {
            tracing::warn!(booking_id = booking.id, error = %e, "status event dropped");
        }

        Ok((booking, entry))
    }

    /// Lists history entries with the matching total, newest first.
    pub async fn list_history(
        &self,
        booking_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<StatusHistoryEntry>, i64), AppError> {
        let entries = self
            .history_repository
            .list(booking_id, limit, offset)
            .await?;
        let total = self.history_repository.count(booking_id).await?;
        Ok((entries, total))
    }

    /// Lists the status catalog.
    pub async fn list_statuses(&self) -> Result<Vec<BookingStatus>, AppError> {
        self.status_repository.list().await
    }

    /// Creates a status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty name and
    /// [`AppError::Conflict`] for a duplicate one.
    pub async fn create_status(
        &self,
        new_status: NewBookingStatus,
    ) -> Result<BookingStatus, AppError> {
        let name = new_status.name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("Status name must not be empty", json!({})));
        }

        if self.status_repository.find_by_name(name).await?.is_some() {
            return Err(AppError::conflict(
                "Status name already exists",
                json!({ "name": name }),
            ));
        }

        self.status_repository
            .create(NewBookingStatus {
                name: name.to_string(),
                description: new_status.description,
            })
            .await
    }

    /// Deletes a status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no status matches and
    /// [`AppError::Conflict`] when bookings still reference it.
    pub async fn delete_status(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.status_repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(
                "Booking status not found",
                json!({ "status_id": id }),
            ));
        }
        Ok(())
    }
}
