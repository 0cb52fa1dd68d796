mod common;

use axum::http::StatusCode;
use common::{app, get, post, post_json};
use serde_json::json;

#[tokio::test]
async fn every_tip_is_visible_by_default() {
    let (status, body) = get(&app(), "/cooking-tips").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 6);
    assert!(body["active_category"].is_null());
    assert_eq!(body["categories"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn category_filters_and_toggles_off() {
    let app = app();

    let (_, body) = post_json(&app, "/cooking-tips/category", json!({ "category": "食材處理" })).await;
    assert_eq!(body["active_category"], "食材處理");
    assert_eq!(body["count"], 2);

    let (_, page) = get(&app, "/cooking-tips").await;
    let ids: Vec<&str> = page["tips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["tip-1", "tip-6"]);

    let (_, body) = post_json(&app, "/cooking-tips/category", json!({ "category": "食材處理" })).await;
    assert!(body["active_category"].is_null());
    assert_eq!(body["count"], 6);
}

#[tokio::test]
async fn null_category_shows_everything() {
    let app = app();

    post_json(&app, "/cooking-tips/category", json!({ "category": "保存方法" })).await;
    let (_, body) = post_json(&app, "/cooking-tips/category", json!({ "category": null })).await;

    assert!(body["active_category"].is_null());
    assert_eq!(body["count"], 6);
}

#[tokio::test]
async fn favorite_toggles() {
    let app = app();

    let (_, body) = post(&app, "/cooking-tips/tip-2/favorite").await;
    assert_eq!(body["is_favorite"], false);

    let (_, body) = post(&app, "/cooking-tips/tip-1/favorite").await;
    assert_eq!(body["is_favorite"], true);
}

#[tokio::test]
async fn favorite_of_unknown_tip_is_not_found() {
    let (status, body) = post(&app(), "/cooking-tips/tip-99/favorite").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}
