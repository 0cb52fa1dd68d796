use axum::{
    Json, Router,
    extract::Multipart,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use lazykitchen_catalog::fixtures;
use lazykitchen_recognition::{
    Endpoint, HttpRecognizer, ImagePolicy, ImageUpload, RecognitionError, Recognizer,
    recognize_ingredients,
};
use serde_json::json;

const API_KEY: &str = "test-key";

async fn recognize(headers: HeaderMap, mut multipart: Multipart) -> impl IntoResponse {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some("Bearer test-key");

    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "bad token"})));
    }

    let mut image_len = 0;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("image") {
            image_len = field.bytes().await.map(|b| b.len()).unwrap_or_default();
        }
    }

    if image_len == 0 {
        return (StatusCode::BAD_REQUEST, Json(json!({"message": "missing image"})));
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "ingredients": [
                {"name": "番茄", "confidence": 0.92, "quantity": "200", "unit": "g"},
                {"name": "洋蔥", "confidence": 0.4},
                {"name": "牛肉", "confidence": 0.88}
            ]
        })),
    )
}

async fn empty() -> impl IntoResponse {
    Json(json!({"success": true}))
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance")
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/food-recognition", post(recognize))
        .route("/empty", post(empty))
        .route("/unavailable", post(unavailable));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn endpoint(base_url: &str, path: &str, api_key: &str) -> Endpoint {
    Endpoint {
        base_url: base_url.to_owned(),
        path: path.to_owned(),
        api_key: api_key.to_owned(),
    }
}

fn photo() -> ImageUpload {
    ImageUpload::new("fridge.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0])
}

#[tokio::test]
async fn posts_multipart_with_bearer_token() {
    let base = spawn_server().await;
    let recognizer = HttpRecognizer::new(endpoint(&base, "/food-recognition", API_KEY));

    let recognition = recognizer.recognize(photo()).await.unwrap();

    assert_eq!(recognition.ingredients.len(), 3);
    assert_eq!(recognition.ingredients[0].quantity.as_deref(), Some("200"));
}

#[tokio::test]
async fn maps_confident_matches_onto_catalog() {
    let base = spawn_server().await;
    let recognizer = HttpRecognizer::new(endpoint(&base, "/food-recognition", API_KEY));

    let ids = recognize_ingredients(
        &recognizer,
        &ImagePolicy::default(),
        photo(),
        &fixtures::ingredients(),
    )
    .await
    .unwrap();

    assert_eq!(ids, vec!["ing-8"]);
}

#[tokio::test]
async fn missing_ingredient_list_is_empty() {
    let base = spawn_server().await;
    let recognizer = HttpRecognizer::new(endpoint(&base, "/empty", API_KEY));

    let recognition = recognizer.recognize(photo()).await.unwrap();
    assert!(recognition.ingredients.is_empty());
}

#[tokio::test]
async fn error_message_is_taken_from_json_body() {
    let base = spawn_server().await;
    let recognizer = HttpRecognizer::new(endpoint(&base, "/food-recognition", "wrong"));

    let err = recognizer.recognize(photo()).await.unwrap_err();
    match err {
        RecognitionError::Server { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "bad token");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_falls_back_to_status() {
    let base = spawn_server().await;
    let recognizer = HttpRecognizer::new(endpoint(&base, "/unavailable", API_KEY));

    let err = recognizer.recognize(photo()).await.unwrap_err();
    assert_eq!(err.to_string(), "Server error: 503");
}

#[tokio::test]
async fn invalid_upload_never_reaches_the_endpoint() {
    let recognizer = HttpRecognizer::new(endpoint("http://127.0.0.1:9", "/never", API_KEY));
    let gif = ImageUpload::new("a.gif", "image/gif", vec![1]);

    let err = recognize_ingredients(
        &recognizer,
        &ImagePolicy::default(),
        gif,
        &fixtures::ingredients(),
    )
    .await
    .unwrap_err();

    assert!(err.is_invalid_upload());
}

#[tokio::test]
async fn unreachable_endpoint_is_an_http_error() {
    let recognizer = HttpRecognizer::new(endpoint("http://127.0.0.1:9", "/never", API_KEY));

    let err = recognizer.recognize(photo()).await.unwrap_err();
    assert!(matches!(err, RecognitionError::Http(_)));
}
