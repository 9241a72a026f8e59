use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Always answers 200: provider trouble is reported inside `reply`.
#[tracing::instrument(skip(state, request))]
pub async fn chat_handler<L>(
    State(state): State<AppState<L>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    tracing::debug!(message = %sanitize_prompt(&request.message), "Processing chat message");

    let reply = state.chat_service.reply(&request.message).await;

    (StatusCode::OK, Json(ChatResponse { reply }))
}
