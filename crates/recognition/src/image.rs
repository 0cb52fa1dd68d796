use crate::error::{RecognitionError, RecognitionResult};
use crate::types::ImageUpload;

pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
pub const ACCEPTED_FORMATS: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Size and format limits applied before an image leaves the server.
#[derive(Clone, Debug)]
pub struct ImagePolicy {
    pub max_size: usize,
    pub accepted_formats: Vec<String>,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            max_size: MAX_IMAGE_SIZE,
            accepted_formats: ACCEPTED_FORMATS.iter().map(|f| (*f).to_owned()).collect(),
        }
    }
}

impl ImagePolicy {
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    pub fn validate(&self, upload: &ImageUpload) -> RecognitionResult<()> {
        if upload.size() > self.max_size {
            return Err(RecognitionError::ImageTooLarge {
                size: upload.size(),
                max_mb: self.max_size / (1024 * 1024),
            });
        }

        if !self
            .accepted_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(&upload.content_type))
        {
            return Err(RecognitionError::UnsupportedFormat {
                found: upload.content_type.clone(),
                accepted: self.accepted_formats.join(", "),
            });
        }

        Ok(())
    }
}
