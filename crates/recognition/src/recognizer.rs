use async_trait::async_trait;

use crate::error::RecognitionResult;
use crate::types::{ImageUpload, Recognition};

/// Turns a photo into a list of recognised food items.
#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize(&self, upload: ImageUpload) -> RecognitionResult<Recognition>;

    /// Short name used in logs.
    fn kind(&self) -> &'static str;
}
