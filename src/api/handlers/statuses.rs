//! Handlers for booking status transitions and the status catalog.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::status::{
    CreateStatusRequest, StatusResponse, TransitionResponse, UpdateStatusRequest,
};
use crate::api::middleware::auth::AuthUser;
use crate::domain::entities::NewBookingStatus;
use crate::error::AppError;
use crate::state::AppState;

/// Transitions a booking to a new status and records a history entry.
///
/// # Endpoint
///
/// `PATCH /api/bookings/{id}/status`
///
/// # Request Body
///
/// ```json
/// { "status_id": 2 }
/// ```
///
/// # Errors
///
/// - 404 when the booking or the status id does not exist
pub async fn update_booking_status_handler(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(booking_id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<TransitionResponse>, AppError> {
    let (booking, entry) = state
        .status_service
        .update_booking_status(booking_id, payload.status_id, Some(auth.user_id))
        .await?;

    Ok(Json(TransitionResponse {
        booking: (&booking).into(),
        history: (&entry).into(),
    }))
}

/// Lists the booking status catalog.
///
/// # Endpoint
///
/// `GET /api/booking-statuses`
pub async fn status_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusResponse>>, AppError> {
    let statuses = state.status_service.list_statuses().await?;
    Ok(Json(statuses.iter().map(Into::into).collect()))
}

/// Adds a status to the catalog.
///
/// # Endpoint
///
/// `POST /api/booking-statuses`
///
/// # Errors
///
/// - 400 on an empty or over-long name
/// - 409 when the name already exists
pub async fn create_status_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateStatusRequest>,
) -> Result<(StatusCode, Json<StatusResponse>), AppError> {
    payload.validate()?;

    let status = state
        .status_service
        .create_status(NewBookingStatus {
            name: payload.name,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json((&status).into())))
}

/// Removes a status from the catalog.
///
/// # Endpoint
///
/// `DELETE /api/booking-statuses/{id}`
///
/// # Errors
///
/// - 404 when no status matches
/// - 409 when bookings still reference the status
pub async fn delete_status_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.status_service.delete_status(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
