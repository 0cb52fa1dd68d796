use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::Router;
use lazykitchen_assistant::Transcript;
use lazykitchen_catalog::{ActiveChip, Catalog, RecipeBook, Selection, TagFilter, TipBoard};
use lazykitchen_recognition::{ImagePolicy, Recognizer};
use lazykitchen_user::ProfileRepository;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;

mod chat;
mod detail;
mod health;
mod ingredients;
mod profile;
mod recipes;
mod tips;

/// Multipart framing on top of the image itself.
const UPLOAD_OVERHEAD: usize = 64 * 1024;

/// Everything a visitor can change while using the app.
///
/// There is a single user, so one session lives for the whole process.
pub struct Session {
    pub selection: Selection,
    pub ingredient_category: ActiveChip,
    pub tag_filter: TagFilter,
    pub recipes: RecipeBook,
    pub tips: TipBoard,
    pub transcript: Transcript,
    pub rng: StdRng,
}

impl Session {
    pub fn new(catalog: &Catalog, rng: StdRng) -> Self {
        Self {
            selection: Selection::default(),
            ingredient_category: ActiveChip::default(),
            tag_filter: TagFilter::default(),
            recipes: RecipeBook::new(catalog.recipes.clone(), catalog.comments.clone()),
            tips: TipBoard::new(catalog.tips.clone()),
            transcript: Transcript::new(),
            rng,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub session: Arc<Mutex<Session>>,
    pub recognizer: Arc<dyn Recognizer>,
    pub image_policy: ImagePolicy,
    pub profiles: Arc<dyn ProfileRepository>,
    pub detail_delay: Duration,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        recognizer: Arc<dyn Recognizer>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        let session = Session::new(&catalog, StdRng::from_os_rng());

        Self {
            catalog: Arc::new(catalog),
            session: Arc::new(Mutex::new(session)),
            recognizer,
            image_policy: ImagePolicy::default(),
            profiles,
            detail_delay: Duration::ZERO,
        }
    }

    pub fn with_image_policy(mut self, policy: ImagePolicy) -> Self {
        self.image_policy = policy;
        self
    }

    pub fn with_detail_delay(mut self, delay: Duration) -> Self {
        self.detail_delay = delay;
        self
    }

    /// Makes chat replies reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        let session = Session::new(&self.catalog, StdRng::seed_from_u64(seed));

        Self {
            session: Arc::new(Mutex::new(session)),
            ..self
        }
    }
}

pub async fn fallback() -> impl IntoResponse {
    Redirect::to("/profile")
}

pub fn router(app_state: AppState) -> Router {
    let upload_limit = app_state.image_policy.max_size + UPLOAD_OVERHEAD;

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/profile", get(profile::page).post(profile::action))
        .route("/profile/appliances", get(profile::appliances))
        .route("/ingredient-input", get(ingredients::page))
        .route("/ingredient-input/category", post(ingredients::category))
        .route(
            "/ingredient-input/selection/{id}",
            post(ingredients::toggle_selection),
        )
        .route(
            "/ingredient-input/recognize",
            post(ingredients::recognize).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/ingredient-input/proceed", post(ingredients::proceed))
        .route("/recipe-recommend", get(recipes::page))
        .route("/recipe-recommend/tags/{tag}", post(recipes::toggle_tag))
        .route(
            "/recipe-recommend/{id}/favorite",
            post(recipes::toggle_favorite),
        )
        .route("/recipe-detail", get(detail::first))
        .route("/recipe-detail/{id}", get(detail::page))
        .route("/recipe-detail/{id}/steps/{index}", get(detail::step))
        .route("/cooking-tips", get(tips::page))
        .route("/cooking-tips/category", post(tips::category))
        .route("/cooking-tips/{id}/favorite", post(tips::toggle_favorite))
        .route("/chat", get(chat::page).post(chat::action))
        .fallback(fallback)
        .with_state(app_state)
}
