//! Booking creation and retrieval service.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use tokio::sync::mpsc;

use crate::domain::booking_event::BookingEvent;
use crate::domain::entities::{Booking, NewBooking, PENDING_STATUS};
use crate::domain::repositories::{BookingRepository, ProfileRepository, StatusRepository};
use crate::error::AppError;
use crate::utils::time_grid::TimeRange;

/// Parameters for a booking request, after DTO validation.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Authenticated user id of the caller; mapped to a customer profile.
    pub customer_user_id: i64,
    pub professional_id: i64,
    pub service_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// Explicit duration; falls back to the service's estimate when absent.
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

/// Service creating bookings under the non-overlap invariant.
///
/// The overlap check here fails fast with a descriptive Conflict; the
/// authoritative guard against concurrent writers is the SERIALIZABLE
/// check-and-insert inside [`BookingRepository::create`].
pub struct BookingService<B, P, S>
where
    B: BookingRepository,
    P: ProfileRepository,
    S: StatusRepository,
{
    booking_repository: Arc<B>,
    profile_repository: Arc<P>,
    status_repository: Arc<S>,
    notify_tx: mpsc::Sender<BookingEvent>,
}

impl<B, P, S> BookingService<B, P, S>
where
    B: BookingRepository,
    P: ProfileRepository,
    S: StatusRepository,
{
    /// Creates a new booking service.
    pub fn new(
        booking_repository: Arc<B>,
        profile_repository: Arc<P>,
        status_repository: Arc<S>,
        notify_tx: mpsc::Sender<BookingEvent>,
    ) -> Self {
        Self {
            booking_repository,
            profile_repository,
            status_repository,
            notify_tx,
        }
    }

    /// Creates a booking if the requested interval is free.
    ///
    /// # Validation sequence
    ///
    /// 1. Resolve the caller's customer profile
    /// 2. Verify the professional (active) and the service exist
    /// 3. Compute the half-open interval `[time, time + duration)`
    /// 4. Reject overlap with any non-cancelled booking on the same date
    /// 5. Insert with the initial `pending` status
    ///
    /// No history entry is written at creation; history begins at the first
    /// status transition. A `created` event is emitted fire-and-forget.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] - missing customer profile, professional or service
    /// - [`AppError::Validation`] - non-positive duration or interval crossing midnight
    /// - [`AppError::Conflict`] - slot not available
    /// - [`AppError::Internal`] - database failure or missing default status
    pub async fn create_booking(&self, request: BookingRequest) -> Result<Booking, AppError> {
        let customer = self
            .profile_repository
            .find_customer_by_user(request.customer_user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Customer profile not found",
                    json!({ "user_id": request.customer_user_id }),
                )
            })?;

        let professional = self
            .profile_repository
            .find_professional(request.professional_id)
            .await?
            .filter(|p| p.active)
            .ok_or_else(|| {
                AppError::not_found(
                    "Professional not found",
                    json!({ "professional_id": request.professional_id }),
                )
            })?;

        let offering = self
            .profile_repository
            .find_service(request.service_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Service not found",
                    json!({ "service_id": request.service_id }),
                )
            })?;

        let duration_minutes = request.duration_minutes.unwrap_or(offering.duration_minutes);

        let requested = u32::try_from(duration_minutes)
            .ok()
            .and_then(|d| TimeRange::from_start_and_duration(request.start_time, d))
            .ok_or_else(|| {
                AppError::bad_request(
                    "Duration must be positive and the booking must end before midnight",
                    json!({
                        "start_time": request.start_time.to_string(),
                        "duration_minutes": duration_minutes,
                    }),
                )
            })?;

        let existing = self
            .booking_repository
            .list_for_professional_on(professional.id, request.date)
            .await?;

        let conflict = existing
            .iter()
            .filter(|b| !b.is_cancelled())
            .filter_map(|b| b.time_range().map(|r| (b, r)))
            .find(|(_, range)| range.overlaps(&requested));

        if let Some((taken, _)) = conflict {
            return Err(AppError::conflict(
                "Requested slot is not available",
                json!({
                    "professional_id": professional.id,
                    "date": request.date.to_string(),
                    "conflicting_booking_id": taken.id,
                }),
            ));
        }

        let pending = self
            .status_repository
            .find_by_name(PENDING_STATUS)
            .await?
            .ok_or_else(|| {
                AppError::internal(
                    "Default booking status is missing from the catalog",
                    json!({ "status": PENDING_STATUS }),
                )
            })?;

        let booking = self
            .booking_repository
            .create(NewBooking {
                customer_id: customer.id,
                professional_id: professional.id,
                service_id: offering.id,
                booked_date: request.date,
                start_time: request.start_time,
                duration_minutes,
                status_id: pending.id,
                notes: request.notes,
            })
            .await?;

        // Fire-and-forget: a full queue never fails the booking.
        if let Err(e) = self.notify_tx.try_send(BookingEvent::created(booking.id)) {
            tracing::warn!(booking_id = booking.id, error = %e, "booking event dropped");
        }

        Ok(booking)
    }

    /// Fetches a booking by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no booking matches.
    pub async fn get_booking(&self, id: i64) -> Result<Booking, AppError> {
        self.booking_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found", json!({ "booking_id": id })))
    }

    /// Lists bookings with optional filters; returns the page and the total.
    pub async fn list_bookings(
        &self,
        professional_id: Option<i64>,
        date: Option<NaiveDate>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Booking>, i64), AppError> {
        let bookings = self
            .booking_repository
            .list(professional_id, date, limit, offset)
            .await?;
        let total = self
            .booking_repository
            .count(professional_id, date)
            .await?;
        Ok((bookings, total))
    }
}
