//! Handlers for booking creation and reads.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::booking::{BookingListResponse, BookingResponse, CreateBookingRequest};
use crate::api::dto::pagination::BookingListParams;
use crate::api::middleware::auth::AuthUser;
use crate::application::services::BookingRequest;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::datefmt::{parse_date, parse_time};

/// Creates a booking for the authenticated customer.
///
/// # Endpoint
///
/// `POST /api/bookings`
///
/// # Request Body
///
/// ```json
/// {
///   "professional_id": 1,
///   "service_id": 2,
///   "date": "2025-06-30",
///   "time": "10:00",
///   "duration_minutes": 60,   // optional, defaults to the service estimate
///   "notes": "first visit"    // optional
/// }
/// ```
///
/// # Errors
///
/// - 400 on validation failures (bad date/time format, bad duration)
/// - 404 when the customer profile, professional, or service is missing
/// - 409 when the requested slot overlaps a non-cancelled booking
pub async fn create_booking_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    payload.validate()?;

    let booking = state
        .booking_service
        .create_booking(BookingRequest {
            customer_user_id: auth.user_id,
            professional_id: payload.professional_id,
            service_id: payload.service_id,
            date: parse_date(&payload.date)?,
            start_time: parse_time(&payload.time)?,
            duration_minutes: payload.duration_minutes,
            notes: payload.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json((&booking).into())))
}

/// Fetches one booking by id.
///
/// # Endpoint
///
/// `GET /api/bookings/{id}`
pub async fn get_booking_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state.booking_service.get_booking(id).await?;
    Ok(Json((&booking).into()))
}

/// Lists bookings, optionally filtered by professional and/or date.
///
/// # Endpoint
///
/// `GET /api/bookings?professional_id=1&date=2025-06-30&page=1&page_size=25`
pub async fn booking_list_handler(
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> Result<Json<BookingListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|message| AppError::bad_request(message, serde_json::json!({})))?;

    let date = params.date.as_deref().map(parse_date).transpose()?;

    let (bookings, total) = state
        .booking_service
        .list_bookings(params.professional_id, date, limit, offset)
        .await?;

    Ok(Json(BookingListResponse {
        total,
        items: bookings.iter().map(Into::into).collect(),
    }))
}
