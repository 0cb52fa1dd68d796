use axum::{Json, extract::State};
use lazykitchen_assistant::respond;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct MessageInput {
    pub message: String,
}

/// GET /chat
#[tracing::instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.lock().await;

    Json(json!({ "messages": session.transcript.messages() }))
}

/// POST /chat
#[tracing::instrument(skip_all)]
pub async fn action(
    State(state): State<AppState>,
    Json(input): Json<MessageInput>,
) -> Result<Json<Value>, AppError> {
    let mut guard = state.session.lock().await;
    let session = &mut *guard;

    if session.transcript.push_user(&input.message).is_none() {
        return Err(AppError::validation("Message must not be empty"));
    }

    let reply = respond(&input.message, session.recipes.all(), &mut session.rng);
    session.transcript.push_reply(&reply);

    Ok(Json(json!({
        "reply": reply,
        "messages": session.transcript.messages(),
    })))
}
