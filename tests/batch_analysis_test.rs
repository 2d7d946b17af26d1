// Batch analysis endpoint tests

mod common;

use axum::http::StatusCode;
use common::setup_test_app;
use phish_sense_api::RiskStatus;
use phish_sense_api::models::BatchAnalysisResponse;
use serde_json::{json, Value};

#[tokio::test]
async fn test_batch_preserves_order() {
    let app = setup_test_app();

    let response = app
        .post("/api/analyze/batch")
        .json(&json!({
            "urls": [" https://example.com ", "not a url", "http://192.168.1.1/login"]
        }))
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let batch: BatchAnalysisResponse = response.json().await;
    assert_eq!(batch.count, 3);
    assert_eq!(batch.results.len(), 3);

    assert_eq!(batch.results[0].url, "https://example.com");
    assert_eq!(batch.results[0].status, RiskStatus::Safe);
    assert_eq!(batch.results[1].risk_score, 95);
    assert_eq!(batch.results[2].checks.url_pattern, 40);

    for result in &batch.results {
        assert!(result.risk_score <= 100);
    }
}

#[tokio::test]
async fn test_batch_accepts_ten_urls() {
    let app = setup_test_app();
    let urls: Vec<String> = (0..10).map(|i| format!("https://site{}.example.com", i)).collect();

    let response = app
        .post("/api/analyze/batch")
        .json(&json!({ "urls": urls }))
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let batch: BatchAnalysisResponse = response.json().await;
    assert_eq!(batch.count, 10);
}

#[tokio::test]
async fn test_batch_rejects_more_than_ten() {
    let app = setup_test_app();
    let urls: Vec<String> = (0..11).map(|i| format!("https://site{}.example.com", i)).collect();

    let response = app
        .post("/api/analyze/batch")
        .json(&json!({ "urls": urls }))
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await;
    assert_eq!(body["error"], "Maximum 10 URLs allowed per batch");
}

#[tokio::test]
async fn test_batch_rejects_empty_array() {
    let app = setup_test_app();

    let response = app
        .post("/api/analyze/batch")
        .json(&json!({ "urls": [] }))
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await;
    assert_eq!(body["error"], "URLs must be a non-empty array");
}

#[tokio::test]
async fn test_batch_requires_urls_field() {
    let app = setup_test_app();

    let response = app
        .post("/api/analyze/batch")
        .json(&json!({ "url": "https://example.com" }))
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await;
    assert_eq!(body["error"], "URLs array is required");
}

#[tokio::test]
async fn test_batch_rejects_non_array() {
    let app = setup_test_app();

    let response = app
        .post("/api/analyze/batch")
        .json(&json!({ "urls": "https://example.com" }))
        .send()
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await;
    assert!(body["error"].is_string());
}
