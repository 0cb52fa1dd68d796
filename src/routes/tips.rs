use axum::{
    Json,
    extract::{Path, State},
};
use lazykitchen_catalog::TIP_CATEGORIES;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub category: Option<String>,
}

/// GET /cooking-tips
#[tracing::instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.lock().await;
    let tips = session.tips.visible();

    Json(json!({
        "count": tips.len(),
        "tips": tips,
        "active_category": session.tips.active_category(),
        "categories": TIP_CATEGORIES,
    }))
}

/// POST /cooking-tips/category
#[tracing::instrument(skip(state))]
pub async fn category(
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> Json<Value> {
    let mut session = state.session.lock().await;

    let active = session.tips.toggle_category(input.category).map(str::to_owned);
    let count = session.tips.visible().len();

    Json(json!({ "active_category": active, "count": count }))
}

/// POST /cooking-tips/{id}/favorite
#[tracing::instrument(skip(state))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut session = state.session.lock().await;

    let is_favorite = session.tips.toggle_favorite(&id)?;

    Ok(Json(json!({ "id": id, "is_favorite": is_favorite })))
}
