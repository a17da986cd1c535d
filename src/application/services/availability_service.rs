//! Availability calculation and window management service.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::entities::{
    AvailabilityWindow, NewAvailabilityWindow, Slot, weekday_of,
};
use crate::domain::repositories::{AvailabilityRepository, BookingRepository, ProfileRepository};
use crate::error::AppError;
use crate::utils::time_grid::{self, TimeRange};

/// Service deriving bookable slots from weekly availability windows and
/// existing bookings, and managing the windows themselves.
///
/// Slot granularity is a deployment parameter (`SLOT_MINUTES`), not a
/// constant: different platforms slice the same window differently.
pub struct AvailabilityService<A, B, P>
where
    A: AvailabilityRepository,
    B: BookingRepository,
    P: ProfileRepository,
{
    availability_repository: Arc<A>,
    booking_repository: Arc<B>,
    profile_repository: Arc<P>,
    slot_minutes: u32,
}

impl<A, B, P> AvailabilityService<A, B, P>
where
    A: AvailabilityRepository,
    B: BookingRepository,
    P: ProfileRepository,
{
    /// Creates a new availability service with the configured slot size.
    pub fn new(
        availability_repository: Arc<A>,
        booking_repository: Arc<B>,
        profile_repository: Arc<P>,
        slot_minutes: u32,
    ) -> Self {
        Self {
            availability_repository,
            booking_repository,
            profile_repository,
            slot_minutes,
        }
    }

    /// Computes the ordered slot sequence for one professional and date.
    ///
    /// # Algorithm
    ///
    /// 1. Fetch the professional's windows for the date's weekday
    /// 2. Fetch all non-cancelled bookings for that date
    /// 3. Coalesce the windows into sorted disjoint ranges, so overlapping
    ///    windows cannot produce duplicate or out-of-order slots
    /// 4. Partition each range into `slot_minutes`-sized slots
    /// 5. Mark a slot unavailable when it overlaps any booked interval
    ///    (half-open comparison, so back-to-back bookings don't collide)
    ///
    /// The result is ordered and non-overlapping; it is empty when the
    /// professional has no windows on that weekday. Past dates are not
    /// rejected here; whether a date is bookable is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the professional does not exist or
    /// is inactive. Returns [`AppError::Internal`] on database errors.
    pub async fn get_available_slots(
        &self,
        professional_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Slot>, AppError> {
        self.require_professional(professional_id).await?;

        let windows = self
            .availability_repository
            .list_for_weekday(professional_id, weekday_of(date))
            .await?;

        let bookings = self
            .booking_repository
            .list_for_professional_on(professional_id, date)
            .await?;

        let booked: Vec<TimeRange> = bookings
            .iter()
            .filter(|b| !b.is_cancelled())
            .filter_map(|b| b.time_range())
            .collect();

        let ranges =
            time_grid::coalesce(windows.iter().filter_map(|w| w.time_range()).collect());

        let mut slots = Vec::new();
        for range in &ranges {
            for slot in range.partition(self.slot_minutes) {
                let available = !booked.iter().any(|b| b.overlaps(&slot));
                slots.push(Slot {
                    start_time: slot.start,
                    end_time: slot.end,
                    available,
                });
            }
        }

        Ok(slots)
    }

    /// Lists all windows a professional has defined.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the professional does not exist.
    pub async fn list_windows(
        &self,
        professional_id: i64,
    ) -> Result<Vec<AvailabilityWindow>, AppError> {
        self.require_professional(professional_id).await?;
        self.availability_repository
            .list_for_professional(professional_id)
            .await
    }

    /// Creates an availability window for a professional.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the weekday is out of range or
    /// the window is empty/inverted, [`AppError::NotFound`] when the
    /// professional does not exist.
    pub async fn add_window(
        &self,
        new_window: NewAvailabilityWindow,
    ) -> Result<AvailabilityWindow, AppError> {
        if !(0..=6).contains(&new_window.weekday) {
            return Err(AppError::bad_request(
                "Weekday must be between 0 (Sunday) and 6 (Saturday)",
                json!({ "weekday": new_window.weekday }),
            ));
        }

        if new_window.start_time >= new_window.end_time {
            return Err(AppError::bad_request(
                "Window start time must be before end time",
                json!({
                    "start_time": new_window.start_time.to_string(),
                    "end_time": new_window.end_time.to_string(),
                }),
            ));
        }

        self.require_professional(new_window.professional_id).await?;

        self.availability_repository.create(new_window).await
    }

    /// Deletes an availability window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no window matches the id.
    pub async fn remove_window(&self, window_id: i64) -> Result<(), AppError> {
        let deleted = self.availability_repository.delete(window_id).await?;
        if !deleted {
            return Err(AppError::not_found(
                "Availability window not found",
                json!({ "window_id": window_id }),
            ));
        }
        Ok(())
    }

    async fn require_professional(&self, professional_id: i64) -> Result<(), AppError> {
        let professional = self
            .profile_repository
            .find_professional(professional_id)
            .await?;

        match professional {
            Some(p) if p.active => Ok(()),
            _ => Err(AppError::not_found(
                "Professional not found",
                json!({ "professional_id": professional_id }),
            )),
        }
    }
}
