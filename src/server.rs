use std::sync::Arc;

use anyhow::Result;
use lazykitchen_catalog::Catalog;
use lazykitchen_recognition::{
    Endpoint, HttpRecognizer, ImagePolicy, Recognizer, SimulatedRecognizer,
};
use lazykitchen_user::{FileProfileRepository, InMemoryProfileRepository, ProfileRepository};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::{Config, RecognitionMode, StorageBackend};
use crate::routes::AppState;

pub fn recognizer(config: &Config, catalog: &Catalog) -> Arc<dyn Recognizer> {
    let recognition = &config.recognition;

    match recognition.mode {
        RecognitionMode::Simulated => Arc::new(
            SimulatedRecognizer::new(catalog.ingredients.clone())
                .with_delay(recognition.simulated_delay()),
        ),
        RecognitionMode::Remote => Arc::new(HttpRecognizer::new(Endpoint {
            base_url: recognition.base_url.to_owned(),
            path: recognition.recognize_path.to_owned(),
            api_key: recognition.api_key.to_owned(),
        })),
    }
}

pub fn profile_repository(config: &Config) -> Arc<dyn ProfileRepository> {
    match config.storage.backend {
        StorageBackend::File => Arc::new(FileProfileRepository::new(&config.storage.profile_path)),
        StorageBackend::Memory => Arc::new(InMemoryProfileRepository::new()),
    }
}

/// Loads and checks the catalog, then wires the recognizer and profile store
/// selected by `config`.
pub fn build_state(config: &Config) -> Result<AppState> {
    let catalog = Catalog::builtin();
    catalog.validate()?;

    let recognizer = recognizer(config, &catalog);
    let profiles = profile_repository(config);

    tracing::info!(
        recognizer = recognizer.kind(),
        storage = ?config.storage.backend,
        profile_path = %config.storage.profile_path.display(),
        ingredients = catalog.ingredients.len(),
        recipes = catalog.recipes.len(),
        tips = catalog.tips.len(),
        "Application state ready"
    );

    Ok(AppState::new(catalog, recognizer, profiles)
        .with_image_policy(ImagePolicy::with_max_size(config.recognition.max_image_size))
        .with_detail_delay(config.detail.loading_delay()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting lazykitchen server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let state = build_state(&config)?;

    let app = crate::routes::router(state)
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

/// Loads everything `serve` would without binding a socket.
pub fn check(config: &Config) -> Result<()> {
    let state = build_state(config)?;

    tracing::info!(
        recognizer = state.recognizer.kind(),
        max_image_size = state.image_policy.max_size,
        detail_delay_ms = state.detail_delay.as_millis() as u64,
        "Configuration and catalog are valid"
    );

    Ok(())
}
