use axum::{
    Json,
    extract::{Multipart, Path, Query, State, multipart::MultipartError},
    http::{HeaderMap, StatusCode, header},
};
use lazykitchen_catalog::{IngredientFilter, categories};
use lazykitchen_recognition::{ImagePolicy, ImageUpload, RecognitionError, recognize_ingredients};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::routes::{AppState, Session};

/// Shown when recognition worked but nothing matched the catalog.
pub const NOTHING_RECOGNIZED_ALERT: &str =
    "未能識別任何食材，請嘗試拍攝更清晰的照片或手動選擇食材。";

pub const NEXT_VIEW: &str = "/recipe-recommend";

#[derive(Debug, Default, Deserialize)]
pub struct IngredientQuery {
    #[serde(default)]
    pub keyword: String,
    /// Overrides the session's category chip for this request only.
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub category: Option<String>,
}

fn selection_json(state: &AppState, session: &Session) -> Value {
    json!({
        "selected": session.selection.resolve(&state.catalog.ingredients),
        "selected_count": session.selection.len(),
        "can_proceed": session.selection.can_proceed(),
    })
}

/// GET /ingredient-input
#[tracing::instrument(skip(state))]
pub async fn page(
    State(state): State<AppState>,
    Query(query): Query<IngredientQuery>,
) -> Json<Value> {
    let session = state.session.lock().await;

    let category = query
        .category
        .clone()
        .filter(|c| !c.is_empty())
        .or_else(|| session.ingredient_category.get().map(str::to_owned));
    let filter = IngredientFilter::new(query.keyword.trim(), category.clone());

    let ingredients: Vec<Value> = filter
        .apply(&state.catalog.ingredients)
        .into_iter()
        .map(|ingredient| {
            json!({
                "ingredient": ingredient,
                "selected": session.selection.contains(&ingredient.id),
            })
        })
        .collect();

    let mut payload = json!({
        "keyword": query.keyword,
        "active_category": category,
        "categories": categories(&state.catalog.ingredients),
        "ingredients": ingredients,
    });
    merge(&mut payload, selection_json(&state, &session));

    Json(payload)
}

/// POST /ingredient-input/category
#[tracing::instrument(skip(state))]
pub async fn category(
    State(state): State<AppState>,
    Json(input): Json<CategoryInput>,
) -> Json<Value> {
    let mut session = state.session.lock().await;

    let active = match input.category {
        Some(category) => session.ingredient_category.toggle(category),
        None => {
            session.ingredient_category.clear();
            None
        }
    };

    Json(json!({ "active_category": active }))
}

/// POST /ingredient-input/selection/{id}
#[tracing::instrument(skip(state))]
pub async fn toggle_selection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut session = state.session.lock().await;

    let selected = session
        .selection
        .toggle_in(&state.catalog.ingredients, &id)?;

    let mut payload = json!({ "id": id, "is_selected": selected });
    merge(&mut payload, selection_json(&state, &session));

    Ok(Json(payload))
}

/// An upload cut off by the body limit is reported like any oversized image.
fn multipart_error(err: MultipartError, policy: &ImagePolicy, declared: Option<usize>) -> AppError {
    if err.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::validation(err.body_text());
    }

    RecognitionError::ImageTooLarge {
        size: declared.unwrap_or(policy.max_size + 1),
        max_mb: policy.max_size / (1024 * 1024),
    }
    .into()
}

async fn read_image(
    multipart: &mut Multipart,
    policy: &ImagePolicy,
    declared: Option<usize>,
) -> Result<ImageUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, policy, declared))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_owned();
        let content_type = match field.content_type() {
            Some(ct) if ct != "application/octet-stream" => ct.to_owned(),
            _ => mime_guess::from_path(&file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_owned(),
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, policy, declared))?;

        return Ok(ImageUpload::new(file_name, content_type, bytes.to_vec()));
    }

    Err(AppError::validation("Missing multipart field `image`"))
}

/// POST /ingredient-input/recognize
///
/// The session stays unlocked while the recognizer runs.
#[tracing::instrument(skip_all)]
pub async fn recognize(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    let upload = read_image(&mut multipart, &state.image_policy, declared).await?;

    tracing::info!(
        file = %upload.file_name,
        content_type = %upload.content_type,
        size = upload.size(),
        "Recognizing ingredients from photo"
    );

    let ids = recognize_ingredients(
        state.recognizer.as_ref(),
        &state.image_policy,
        upload,
        &state.catalog.ingredients,
    )
    .await?;

    let mut session = state.session.lock().await;

    let mut payload = if ids.is_empty() {
        json!({
            "recognized": 0,
            "added": 0,
            "alert": NOTHING_RECOGNIZED_ALERT,
        })
    } else {
        let added = session.selection.extend(ids.iter().cloned());
        json!({
            "recognized": ids.len(),
            "added": added,
            "recognized_ids": ids,
        })
    };
    merge(&mut payload, selection_json(&state, &session));

    Ok(Json(payload))
}

/// POST /ingredient-input/proceed
#[tracing::instrument(skip(state))]
pub async fn proceed(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut session = state.session.lock().await;

    session.selection.ensure_can_proceed()?;
    session.tag_filter.clear();

    tracing::info!(selected = session.selection.len(), "Proceeding to recommendations");

    Ok(Json(json!({ "redirect": NEXT_VIEW })))
}

fn merge(target: &mut Value, extra: Value) {
    if let (Some(target), Value::Object(extra)) = (target.as_object_mut(), extra) {
        target.extend(extra);
    }
}
