//! Client for the remote food recognition endpoint.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::instrument;

use crate::error::{RecognitionError, RecognitionResult};
use crate::recognizer::Recognizer;
use crate::types::{ImageUpload, Recognition};

pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
pub const RECOGNIZE_PATH: &str = "/food-recognition";

#[derive(Clone, Debug)]
pub struct Endpoint {
    pub base_url: String,
    pub path: String,
    pub api_key: String,
}

impl Endpoint {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            path: RECOGNIZE_PATH.to_owned(),
            api_key: api_key.into(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

/// Posts the image as multipart form data with a bearer token.
#[derive(Clone)]
pub struct HttpRecognizer {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpRecognizer {
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    async fn handle_response(response: reqwest::Response) -> RecognitionResult<Recognition> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));

            return Err(RecognitionError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| RecognitionError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Recognizer for HttpRecognizer {
    #[instrument(skip(self, upload), fields(url = %self.endpoint.url(), size = upload.size()))]
    async fn recognize(&self, upload: ImageUpload) -> RecognitionResult<Recognition> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(self.endpoint.url())
            .bearer_auth(&self.endpoint.api_key)
            .multipart(form)
            .send()
            .await?;

        let result = Self::handle_response(response).await;

        match &result {
            Ok(recognition) => tracing::debug!(
                items = recognition.ingredients.len(),
                "Recognition endpoint responded"
            ),
            Err(e) => tracing::warn!(error = %e, "Recognition endpoint failed"),
        }

        result
    }

    fn kind(&self) -> &'static str {
        "remote"
    }
}
