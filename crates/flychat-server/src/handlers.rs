//! HTTP handlers for the chat backend.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use flychat_engine::ChatReply;
use serde::Deserialize;
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Body of `POST /chat`. `message` is optional here so a missing field is
/// reported as a validation error instead of a framework rejection.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub message: Option<String>,
}

/// Banner returned by `GET /`.
pub const BANNER: &str = "Fly Your Tech Chatbot Backend is Running";

/// `GET /`: liveness banner.
pub async fn home() -> &'static str {
    BANNER
}

/// `POST /chat`: route the message to a tool and return its answer.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<IncomingMessage>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let Json(body) = payload.map_err(|e| {
        warn!("rejected chat body: {e}");
        AppError::Validation(e.body_text())
    })?;

    let message = body
        .message
        .ok_or_else(|| AppError::Validation("missing field `message`".into()))?;

    let reply = state.agent.run(&message);
    Ok(Json(ChatReply { reply }))
}
