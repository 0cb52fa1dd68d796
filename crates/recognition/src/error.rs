use thiserror::Error;

pub type RecognitionResult<T> = Result<T, RecognitionError>;

#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("Image must not exceed {max_mb} MB")]
    ImageTooLarge { size: usize, max_mb: usize },

    #[error("Unsupported image format {found}. Please upload {accepted}")]
    UnsupportedFormat { found: String, accepted: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Failed to decode recognition response: {0}")]
    Decode(String),
}

impl RecognitionError {
    /// Upload problems the user can fix by choosing another file.
    pub fn is_invalid_upload(&self) -> bool {
        matches!(
            self,
            RecognitionError::ImageTooLarge { .. } | RecognitionError::UnsupportedFormat { .. }
        )
    }
}
