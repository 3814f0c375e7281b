// src/api/http/history.rs

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::debug;

use crate::api::error::ApiResult;
use crate::api::types::{HistoryResponse, SaveMoodRequest};
use crate::history::MoodHistoryEntry;
use crate::state::AppState;

/// POST /api/mood-history
pub async fn save_mood_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<SaveMoodRequest>, JsonRejection>,
) -> ApiResult<Json<HistoryResponse>> {
    let Json(request) = payload?;

    let entry = MoodHistoryEntry::new(request.message, request.mood, request.score);
    let history = app_state.history.append(entry).await;
    debug!("Mood history now holds {} entries", history.len());

    Ok(Json(HistoryResponse::ok(history)))
}

/// GET /api/mood-history
pub async fn get_history_handler(State(app_state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse::ok(app_state.history.snapshot().await))
}
