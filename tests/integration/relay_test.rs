use super::common;

use axum::http::StatusCode;
use common::stub_service::{Reply, StubService};
use common::test_server::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_relay_returns_upstream_body() {
    let form = json!({ "form": [{ "field_type": "email", "label": "Email" }] });
    let stub = StubService::json(form.clone()).await;
    let server = TestServer::new(&stub.base_url).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/generate_form"))
        .json(&json!({ "prompt": "Newsletter" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, form);
    assert_eq!(stub.received(), vec![json!({ "prompt": "Newsletter" })]);
}

#[tokio::test]
async fn test_relay_passes_invalid_shape_through() {
    let stub = StubService::json(json!({ "form": "oops" })).await;
    let server = TestServer::new(&stub.base_url).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/generate_form"))
        .json(&json!({ "prompt": "x" }))
        .send()
        .await
        .unwrap();

    // Shape checking is left to the caller
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["form"], "oops");
}

#[tokio::test]
async fn test_relay_keeps_upstream_status() {
    let stub = StubService::start(Reply::Json(
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({ "detail": "prompt rejected" }),
    ))
    .await;
    let server = TestServer::new(&stub.base_url).await;

    let response = reqwest::Client::new()
        .post(server.url("/api/generate_form"))
        .json(&json!({ "prompt": "x" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_relay_reports_unreachable_upstream() {
    let server = TestServer::new("http://127.0.0.1:9").await;

    let response = reqwest::Client::new()
        .post(server.url("/api/generate_form"))
        .json(&json!({ "prompt": "x" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}
