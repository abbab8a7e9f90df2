//! API integration tests
//!
//! Runs the router in-process with the keyword classifier and an
//! in-memory store; no network involved.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use moodline::{JournalConfig, KeywordClassifier, MemoryStateStore, MoodJournal};

async fn test_app() -> Router {
    let journal = MoodJournal::load(
        Arc::new(KeywordClassifier::new()),
        Arc::new(MemoryStateStore::new()),
        JournalConfig::default(),
    )
    .await
    .unwrap();
    moodline_server::app(journal)
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["classifier"], "keyword");
}

#[tokio::test]
async fn test_submit_entry_returns_classification() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json(
            "/journal/entries",
            serde_json::json!({ "text": "I aced my exam today!" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["mood"], "excited");
    assert_eq!(body["input_method"], "text");
    assert!(body["confidence"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_empty_entry_is_rejected() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json(
            "/journal/entries",
            serde_json::json!({ "text": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_input_method_is_rejected() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json(
            "/journal/entries",
            serde_json::json!({ "text": "fine", "input_method": "telepathy" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submitted_entry_appears_first_in_history() {
    let app = test_app().await;
    app.clone()
        .oneshot(post_json(
            "/journal/entries",
            serde_json::json!({ "text": "feeling calm and peaceful" }),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_json(
            "/journal/entries",
            serde_json::json!({ "text": "so worried about tomorrow" }),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/journal/entries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["mood"], "anxious");
    assert_eq!(entries[1]["mood"], "calm");
}

#[tokio::test]
async fn test_trend_without_entries_is_none() {
    let app = test_app().await;
    let response = app.oneshot(get("/journal/trend")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["trend"], "none");
}

#[tokio::test]
async fn test_insights_refresh_populates_set() {
    let app = test_app().await;
    for _ in 0..5 {
        app.clone()
            .oneshot(post_json(
                "/journal/entries",
                serde_json::json!({ "text": "calm and peaceful evening" }),
            ))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(post_json("/journal/insights/refresh", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(!body["insights"].as_array().unwrap().is_empty());

    let response = app.oneshot(get("/journal/insights")).await.unwrap();
    let body = json_body(response).await;
    assert!(!body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_summaries_initially_empty() {
    let app = test_app().await;
    let response = app.oneshot(get("/journal/summaries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body.as_array().unwrap().is_empty());
}
