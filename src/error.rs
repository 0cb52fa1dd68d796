use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lazykitchen_catalog::CatalogError;
use lazykitchen_recognition::RecognitionError;
use lazykitchen_user::ProfileError;
use serde_json::json;
use thiserror::Error;

/// Shown when a photo could not be recognized for any reason.
pub const RECOGNITION_FAILED_ALERT: &str = "食材辨識失敗，請稍後再試或手動選擇食材。";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: HashMap<String, String>,
    },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// First message per field, the way form errors are displayed.
    pub fn from_field_errors(errors: &validator::ValidationErrors) -> Self {
        let details = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let message = errors
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string());
                (field.to_string(), message)
            })
            .collect();

        AppError::Validation {
            message: "Invalid profile provided.".to_string(),
            details,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

fn body(error: &str, message: impl Into<String>) -> serde_json::Value {
    json!({
        "error": error,
        "message": message.into(),
    })
}

fn internal(cause: &dyn std::fmt::Display) -> (StatusCode, serde_json::Value) {
    tracing::error!("Internal error: {}", cause);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        body(
            "InternalServerError",
            "An unexpected error occurred. Please try again later.",
        ),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, payload) = match self {
            AppError::Validation { message, details } => {
                let mut payload = body("ValidationFailed", message);
                if !details.is_empty() {
                    payload["details"] = json!(details);
                }
                (StatusCode::UNPROCESSABLE_ENTITY, payload)
            }
            AppError::Catalog(e @ CatalogError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, body("NotFound", e.to_string()))
            }
            AppError::Catalog(
                e @ (CatalogError::NothingSelected
                | CatalogError::StepOutOfRange { .. }
                | CatalogError::NoSteps { .. }),
            ) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                body("ValidationFailed", e.to_string()),
            ),
            AppError::Catalog(e) => internal(&e),
            AppError::Profile(ProfileError::Validation(errors)) => {
                return AppError::from_field_errors(&errors).into_response();
            }
            AppError::Profile(e) => internal(&e),
            // The client shows an alert and stays usable
            AppError::Recognition(e) => {
                tracing::warn!(error = %e, "Ingredient recognition failed");
                (
                    StatusCode::OK,
                    json!({
                        "recognized": 0,
                        "alert": RECOGNITION_FAILED_ALERT,
                        "error": "RecognitionFailed",
                        "message": e.to_string(),
                    }),
                )
            }
            AppError::Internal(msg) => internal(&msg),
        };

        (status, Json(payload)).into_response()
    }
}
