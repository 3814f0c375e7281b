// src/api/http/chat.rs

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, warn};

use crate::api::error::ApiResult;
use crate::api::types::{ChatRequest, ChatResponse};
use crate::chat;
use crate::error::ChatError;
use crate::state::AppState;

/// POST /api/chat
pub async fn chat_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(request) = payload?;
    let message = request.message.ok_or(ChatError::EmptyInput)?;

    // ThreadRng is !Send, keep it out of any await
    let reply = {
        let mut rng = rand::rng();
        chat::respond(
            app_state.scorer.as_ref(),
            &app_state.tips,
            &message,
            &mut rng,
        )?
    };

    if reply.response.is_crisis() {
        warn!("Crisis response returned (score {})", reply.score());
    } else {
        debug!(
            "Chat reply: mood={} score={} comparative={:.3}",
            reply.mood,
            reply.score(),
            reply.analysis.comparative
        );
    }

    Ok(Json(reply.into()))
}
