//! Handler for the available-slots endpoint.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::dto::slots::{SlotsQuery, SlotsResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::datefmt::parse_date;

/// Returns the bookable slot grid for one professional and date.
///
/// # Endpoint
///
/// `GET /api/professionals/{id}/slots?date=YYYY-MM-DD`
///
/// # Response
///
/// ```json
/// {
///   "professional_id": 1,
///   "date": "2025-06-30",
///   "slots": [
///     { "start_time": "09:00", "end_time": "10:00", "available": true },
///     { "start_time": "10:00", "end_time": "11:00", "available": false }
///   ]
/// }
/// ```
///
/// The sequence is ordered and non-overlapping; it is empty when the
/// professional has no availability windows for that weekday.
///
/// # Errors
///
/// Returns 400 on a malformed date, 404 when the professional does not
/// exist or is inactive.
pub async fn slots_handler(
    State(state): State<AppState>,
    Path(professional_id): Path<i64>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let date = parse_date(&query.date)?;

    let slots = state
        .availability_service
        .get_available_slots(professional_id, date)
        .await?;

    Ok(Json(SlotsResponse {
        professional_id,
        date: date.to_string(),
        slots: slots.iter().map(Into::into).collect(),
    }))
}
