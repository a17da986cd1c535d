//! API route configuration.
//!
//! All API endpoints require a verified caller identity via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    booking_list_handler, create_booking_handler, create_status_handler, create_window_handler,
    delete_status_handler, delete_window_handler, get_booking_handler, history_list_handler,
    slots_handler, status_list_handler, update_booking_status_handler, window_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, patch},
};

/// All API routes, protected by gateway identity authentication.
///
/// # Endpoints
///
/// - `GET    /professionals/{id}/slots`         - Bookable slots for a date
/// - `GET    /professionals/{id}/availability`  - List weekly availability windows
/// - `POST   /professionals/{id}/availability`  - Add an availability window
/// - `DELETE /availability/{window_id}`         - Remove an availability window
/// - `POST   /bookings`                         - Create a booking
/// - `GET    /bookings`                         - List bookings (paginated, filterable)
/// - `GET    /bookings/{id}`                    - Fetch one booking
/// - `PATCH  /bookings/{id}/status`             - Transition a booking's status
/// - `GET    /booking-status-history`           - Status transition feed (paginated)
/// - `GET    /booking-statuses`                 - List the status catalog
/// - `POST   /booking-statuses`                 - Add a status
/// - `DELETE /booking-statuses/{id}`            - Remove an unused status
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/professionals/{id}/slots", get(slots_handler))
        .route(
            "/professionals/{id}/availability",
            get(window_list_handler).post(create_window_handler),
        )
        .route("/availability/{window_id}", delete(delete_window_handler))
        .route(
            "/bookings",
            get(booking_list_handler).post(create_booking_handler),
        )
        .route("/bookings/{id}", get(get_booking_handler))
        .route(
            "/bookings/{id}/status",
            patch(update_booking_status_handler),
        )
        .route("/booking-status-history", get(history_list_handler))
        .route(
            "/booking-statuses",
            get(status_list_handler).post(create_status_handler),
        )
        .route("/booking-statuses/{id}", delete(delete_status_handler))
}
