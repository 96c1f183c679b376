use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use happyform::adapters::generation_client::HttpFormGenerator;
use happyform::config::{GenerationSettings, ServerSettings, Settings};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app(upstream: &str) -> axum::Router {
    let settings = Arc::new(Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        generation: GenerationSettings {
            base_url: upstream.to_string(),
        },
    });
    let generator = Arc::new(HttpFormGenerator::from_settings(&settings));
    happyform::create_app(settings, generator)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_config_endpoint() {
    let request = Request::builder()
        .uri("/api/config")
        .body(Body::empty())
        .unwrap();

    let response = app("http://gen.internal:9000").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["generation_endpoint"],
        "http://gen.internal:9000/generate_form"
    );
}

#[tokio::test]
async fn test_generate_form_rejects_missing_prompt() {
    let request = Request::builder()
        .uri("/api/generate_form")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "text": "no prompt key" }).to_string()))
        .unwrap();

    let response = app("http://127.0.0.1:9").oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_generate_form_requires_post() {
    let request = Request::builder()
        .uri("/api/generate_form")
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app("http://127.0.0.1:9").oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
