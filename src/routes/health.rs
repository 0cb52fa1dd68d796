use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Ready once the profile store can be read.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.profiles.get().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "recognizer": state.recognizer.kind(),
                "ingredients": state.catalog.ingredients.len(),
                "recipes": state.catalog.recipes.len(),
            })),
        ),
        Err(e) => {
            tracing::error!("Readiness check failed: profile store unavailable - {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "reason": "profile_store_unavailable"
                })),
            )
        }
    }
}
