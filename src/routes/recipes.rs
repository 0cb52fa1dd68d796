use axum::{
    Json,
    extract::{Path, State},
};
use lazykitchen_catalog::{RECOMMENDED_TAGS, Recipe};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::routes::AppState;

/// A recipe plus the values its card displays.
pub(crate) fn card(recipe: &Recipe) -> Value {
    json!({
        "recipe": recipe,
        "total_time": recipe.total_time(),
        "difficulty_label": recipe.difficulty.label(),
    })
}

/// GET /recipe-recommend
#[tracing::instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.lock().await;

    let recipes: Vec<Value> = session
        .tag_filter
        .apply(session.recipes.all())
        .into_iter()
        .map(card)
        .collect();

    Json(json!({
        "count": recipes.len(),
        "recipes": recipes,
        "active_tag": session.tag_filter.active(),
        "tags": RECOMMENDED_TAGS,
        "selected_ingredients": session.selection.resolve(&state.catalog.ingredients),
    }))
}

/// POST /recipe-recommend/tags/{tag}
#[tracing::instrument(skip(state))]
pub async fn toggle_tag(State(state): State<AppState>, Path(tag): Path<String>) -> Json<Value> {
    let mut session = state.session.lock().await;

    let active = session.tag_filter.toggle(tag).map(str::to_owned);
    let count = session.tag_filter.apply(session.recipes.all()).len();

    Json(json!({ "active_tag": active, "count": count }))
}

/// POST /recipe-recommend/{id}/favorite
#[tracing::instrument(skip(state))]
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut session = state.session.lock().await;

    let is_favorite = session.recipes.toggle_favorite(&id)?;

    Ok(Json(json!({ "id": id, "is_favorite": is_favorite })))
}
