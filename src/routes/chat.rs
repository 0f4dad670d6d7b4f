// src/routes/chat.rs
use axum::{Json, extract::State};

use crate::{
    message::{ChatRequest, ChatResponse},
    services::relay::{FALLBACK_REPLY, recommend},
    state::SharedState,
};

/// POST /chat. Always answers 200: when the provider call fails the caller
/// gets the fixed fallback payload and the cause goes to the log only.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    match recommend(&state.catalog, state.provider.as_ref(), &payload.message).await {
        Ok(response) => Json(response),
        Err(err) => {
            tracing::error!(error = %err, "completion call failed, serving fallback reply");
            Json(ChatResponse {
                response: FALLBACK_REPLY.to_string(),
                products: Vec::new(),
            })
        }
    }
}
