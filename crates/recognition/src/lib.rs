pub mod client;
pub mod error;
pub mod flow;
pub mod image;
pub mod mapper;
pub mod recognizer;
pub mod simulated;
pub mod types;

pub use client::{Endpoint, HttpRecognizer};
pub use error::{RecognitionError, RecognitionResult};
pub use flow::recognize_ingredients;
pub use image::{ACCEPTED_FORMATS, ImagePolicy, MAX_IMAGE_SIZE};
pub use mapper::{CONFIDENCE_THRESHOLD, map_to_catalog, match_item};
pub use recognizer::Recognizer;
pub use simulated::SimulatedRecognizer;
pub use types::{ImageUpload, Recognition, RecognizedItem};
