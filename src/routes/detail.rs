use axum::{
    Json,
    extract::{Path, State},
};
use lazykitchen_catalog::{RecipeBook, StepCursor, display_rating};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::routes::{AppState, recipes::card};

fn detail(book: &RecipeBook, id: Option<&str>) -> Result<Value, AppError> {
    let recipe = book.find_or_first(id)?;
    let cursor = StepCursor::new(recipe)?;

    let related: Vec<Value> = book
        .related()
        .into_iter()
        .map(|r| {
            let mut value = card(r);
            value["rating"] = json!(display_rating(r));
            value
        })
        .collect();

    let mut payload = card(recipe);
    payload["step"] = json!(cursor.view());
    payload["comments"] = json!(book.comments_for(&recipe.id));
    payload["related"] = json!(related);

    Ok(payload)
}

async fn load(state: &AppState, id: Option<&str>) -> Result<Json<Value>, AppError> {
    if !state.detail_delay.is_zero() {
        tokio::time::sleep(state.detail_delay).await;
    }

    let session = state.session.lock().await;

    Ok(Json(detail(&session.recipes, id)?))
}

/// GET /recipe-detail
#[tracing::instrument(skip(state))]
pub async fn first(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    load(&state, None).await
}

/// GET /recipe-detail/{id}
#[tracing::instrument(skip(state))]
pub async fn page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    load(&state, Some(&id)).await
}

/// GET /recipe-detail/{id}/steps/{index}
#[tracing::instrument(skip(state))]
pub async fn step(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<Value>, AppError> {
    let session = state.session.lock().await;

    let recipe = session.recipes.find(&id)?;
    let cursor = StepCursor::at(recipe, index)?;

    Ok(Json(json!({
        "recipe_id": recipe.id,
        "step": cursor.view(),
    })))
}
