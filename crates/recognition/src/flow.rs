use lazykitchen_catalog::Ingredient;

use crate::error::RecognitionResult;
use crate::image::ImagePolicy;
use crate::mapper::map_to_catalog;
use crate::recognizer::Recognizer;
use crate::types::ImageUpload;

/// Validates the upload, sends it to the recognizer and maps the answer onto
/// the catalog. One call is one request; nothing is retried.
pub async fn recognize_ingredients(
    recognizer: &dyn Recognizer,
    policy: &ImagePolicy,
    upload: ImageUpload,
    catalog: &[Ingredient],
) -> RecognitionResult<Vec<String>> {
    policy.validate(&upload)?;

    let recognition = recognizer.recognize(upload).await?;
    let ids = map_to_catalog(&recognition.ingredients, catalog);

    tracing::info!(
        recognizer = recognizer.kind(),
        recognized = recognition.ingredients.len(),
        matched = ids.len(),
        "Recognition mapped to catalog"
    );

    Ok(ids)
}
