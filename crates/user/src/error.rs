use thiserror::Error;

/// Failures when validating or persisting the user profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Profile storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
