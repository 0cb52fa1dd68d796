use axum::{Json, extract::State, response::IntoResponse};
use lazykitchen_user::{APPLIANCES, UserProfile, load_or_default};
use serde_json::json;

use crate::error::AppError;
use crate::routes::AppState;

pub const SAVED_MESSAGE: &str = "設定已儲存成功！";

/// GET /profile
#[tracing::instrument(skip_all)]
pub async fn page(State(state): State<AppState>) -> Result<Json<UserProfile>, AppError> {
    let profile = load_or_default(state.profiles.as_ref()).await?;

    Ok(Json(profile))
}

/// POST /profile
#[tracing::instrument(skip_all)]
pub async fn action(
    State(state): State<AppState>,
    Json(payload): Json<UserProfile>,
) -> Result<impl IntoResponse, AppError> {
    let profile = payload.prepare().inspect_err(|e| {
        tracing::warn!(error = %e, "Profile validation failed");
    })?;

    state.profiles.set(&profile).await?;

    tracing::info!("Profile updated");

    Ok(Json(json!({
        "profile": profile,
        "message": SAVED_MESSAGE,
    })))
}

/// GET /profile/appliances
pub async fn appliances() -> impl IntoResponse {
    Json(json!({ "appliances": APPLIANCES }))
}
