use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lazykitchen_catalog::Ingredient;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::error::RecognitionResult;
use crate::recognizer::Recognizer;
use crate::types::{ImageUpload, Recognition, RecognizedItem};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Development stand-in for the remote endpoint.
///
/// Reports two to four random catalog ingredients with confidence in
/// `[0.7, 1.0)` after a fixed delay. The image itself is ignored.
pub struct SimulatedRecognizer {
    ingredients: Vec<Ingredient>,
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedRecognizer {
    pub fn new(ingredients: Vec<Ingredient>) -> Self {
        Self {
            ingredients,
            delay: DEFAULT_DELAY,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    fn pick(&self) -> Vec<RecognizedItem> {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let count = rng.random_range(2..=4).min(self.ingredients.len());
        let chosen: Vec<&Ingredient> = self.ingredients.choose_multiple(&mut *rng, count).collect();

        chosen
            .into_iter()
            .map(|ingredient| RecognizedItem {
                name: ingredient.name.clone(),
                confidence: rng.random_range(0.7..1.0),
                quantity: Some(format!("{}00", rng.random_range(1..=5))),
                unit: Some("g".to_owned()),
            })
            .collect()
    }
}

#[async_trait]
impl Recognizer for SimulatedRecognizer {
    async fn recognize(&self, upload: ImageUpload) -> RecognitionResult<Recognition> {
        let ingredients = self.pick();

        tracing::debug!(
            file = %upload.file_name,
            items = ingredients.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Simulating recognition"
        );

        tokio::time::sleep(self.delay).await;

        Ok(Recognition { ingredients })
    }

    fn kind(&self) -> &'static str {
        "simulated"
    }
}
