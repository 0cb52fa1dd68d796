mod common;

use axum::http::StatusCode;
use common::{app, get, post_json};
use lazykitchen_assistant::WELCOME;
use lazykitchen_assistant::responder::GREETING;
use serde_json::json;

#[tokio::test]
async fn conversation_opens_with_welcome() {
    let (status, body) = get(&app(), "/chat").await;

    assert_eq!(status, StatusCode::OK);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["sender"], "bot");
    assert_eq!(messages[0]["text"], WELCOME);
}

#[tokio::test]
async fn greeting_is_answered() {
    let app = app();

    let (status, body) = post_json(&app, "/chat", json!({ "message": "你好" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"]["intent"], "greeting");
    assert_eq!(body["reply"]["text"], GREETING);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1]["sender"], "user");
    assert_eq!(messages[1]["text"], "你好");
    assert_eq!(messages[2]["sender"], "bot");
}

#[tokio::test]
async fn recommendation_links_to_a_recipe() {
    let app = app();

    let (_, body) = post_json(&app, "/chat", json!({ "message": "可以推薦一道菜嗎" })).await;

    assert_eq!(body["reply"]["intent"], "recommend");
    let recipe_id = body["reply"]["recipe_id"].as_str().unwrap();
    assert!(["recipe-1", "recipe-2", "recipe-3"].contains(&recipe_id));

    let messages = body["messages"].as_array().unwrap();
    let action = messages.last().unwrap();
    assert_eq!(action["recipe_id"], recipe_id);
    assert!(action["text"].as_str().unwrap().starts_with("查看食譜："));

    let (status, _) = get(&app, &format!("/recipe-detail/{recipe_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn history_accumulates_across_requests() {
    let app = app();

    post_json(&app, "/chat", json!({ "message": "謝謝" })).await;
    post_json(&app, "/chat", json!({ "message": "怎麼做" })).await;

    let (_, body) = get(&app, "/chat").await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let app = app();

    let (status, body) = post_json(&app, "/chat", json!({ "message": "   " })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ValidationFailed");

    let (_, body) = get(&app, "/chat").await;
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
}
