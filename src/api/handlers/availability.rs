//! Handlers for availability window management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::availability::{CreateWindowRequest, WindowResponse};
use crate::domain::entities::NewAvailabilityWindow;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::datefmt::parse_time;

/// Lists the weekly availability windows of a professional.
///
/// # Endpoint
///
/// `GET /api/professionals/{id}/availability`
pub async fn window_list_handler(
    State(state): State<AppState>,
    Path(professional_id): Path<i64>,
) -> Result<Json<Vec<WindowResponse>>, AppError> {
    let windows = state
        .availability_service
        .list_windows(professional_id)
        .await?;

    Ok(Json(windows.iter().map(Into::into).collect()))
}

/// Adds a weekly availability window for a professional.
///
/// # Endpoint
///
/// `POST /api/professionals/{id}/availability`
///
/// # Errors
///
/// Returns 400 on an out-of-range weekday, malformed time, or an
/// empty/inverted window; 404 when the professional does not exist.
pub async fn create_window_handler(
    State(state): State<AppState>,
    Path(professional_id): Path<i64>,
    Json(payload): Json<CreateWindowRequest>,
) -> Result<(StatusCode, Json<WindowResponse>), AppError> {
    payload.validate()?;

    let window = state
        .availability_service
        .add_window(NewAvailabilityWindow {
            professional_id,
            weekday: payload.weekday,
            start_time: parse_time(&payload.start_time)?,
            end_time: parse_time(&payload.end_time)?,
        })
        .await?;

    Ok((StatusCode::CREATED, Json((&window).into())))
}

/// Deletes an availability window.
///
/// # Endpoint
///
/// `DELETE /api/availability/{window_id}`
pub async fn delete_window_handler(
    State(state): State<AppState>,
    Path(window_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.availability_service.remove_window(window_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
