//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{AvailabilityService, BookingService, StatusService};
use crate::domain::booking_event::BookingEvent;
use crate::infrastructure::persistence::{
    PgAvailabilityRepository, PgBookingRepository, PgHistoryRepository, PgProfileRepository,
    PgStatusRepository,
};

/// Availability service wired to the PostgreSQL repositories.
pub type PgAvailabilityService =
    AvailabilityService<PgAvailabilityRepository, PgBookingRepository, PgProfileRepository>;

/// Booking service wired to the PostgreSQL repositories.
pub type PgBookingService =
    BookingService<PgBookingRepository, PgProfileRepository, PgStatusRepository>;

/// Status service wired to the PostgreSQL repositories.
pub type PgStatusService =
    StatusService<PgBookingRepository, PgStatusRepository, PgHistoryRepository>;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub availability_service: Arc<PgAvailabilityService>,
    pub booking_service: Arc<PgBookingService>,
    pub status_service: Arc<PgStatusService>,
    /// Kept for the health endpoint's connectivity probe.
    pub db: Arc<PgPool>,
    pub notify_tx: mpsc::Sender<BookingEvent>,
}

impl AppState {
    /// Builds the state by wiring services to PostgreSQL repositories.
    pub fn new(
        pool: Arc<PgPool>,
        notify_tx: mpsc::Sender<BookingEvent>,
        slot_minutes: u32,
    ) -> Self {
        let booking_repo = Arc::new(PgBookingRepository::new(pool.clone()));
        let availability_repo = Arc::new(PgAvailabilityRepository::new(pool.clone()));
        let status_repo = Arc::new(PgStatusRepository::new(pool.clone()));
        let history_repo = Arc::new(PgHistoryRepository::new(pool.clone()));
        let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));

        let availability_service = Arc::new(AvailabilityService::new(
            availability_repo,
            booking_repo.clone(),
            profile_repo.clone(),
            slot_minutes,
        ));
        let booking_service = Arc::new(BookingService::new(
            booking_repo.clone(),
            profile_repo,
            status_repo.clone(),
            notify_tx.clone(),
        ));
        let status_service = Arc::new(StatusService::new(
            booking_repo,
            status_repo,
            history_repo,
            notify_tx.clone(),
        ));

        Self {
            availability_service,
            booking_service,
            status_service,
            db: pool,
            notify_tx,
        }
    }
}
