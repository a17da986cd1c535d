//! Handler for the append-only status history feed.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::history::HistoryListResponse;
use crate::api::dto::pagination::HistoryListParams;
use crate::error::AppError;
use crate::state::AppState;

/// Lists status transitions, newest first, optionally for one booking.
///
/// # Endpoint
///
/// `GET /api/booking-status-history?booking_id=5&page=1&page_size=25`
pub async fn history_list_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryListParams>,
) -> Result<Json<HistoryListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|message| AppError::bad_request(message, serde_json::json!({})))?;

    let (entries, total) = state
        .status_service
        .list_history(params.booking_id, limit, offset)
        .await?;

    Ok(Json(HistoryListResponse {
        total,
        items: entries.iter().map(Into::into).collect(),
    }))
}
