use super::common;

use axum::http::StatusCode;
use common::stub_service::{Reply, StubService};
use happyform::adapters::generation_client::{FormGenerator, HttpFormGenerator};
use happyform::adapters::submitter::{PromptSubmitter, SharedSession};
use happyform_core::{Applied, ControlShape, FormSession, GenerationError, RenderedForm};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

#[tokio::test]
async fn test_generate_posts_prompt_and_decodes_form() {
    let stub = StubService::json(json!({
        "form": [
            { "field_type": "text", "label": "Name" },
            { "field_type": "slider" },
            null
        ]
    }))
    .await;
    let generator = HttpFormGenerator::new(&stub.base_url);

    let fields = generator.generate("Contact form").await.unwrap();

    assert_eq!(fields.len(), 3);
    assert_eq!(fields.renderable_count(), 1);
    assert_eq!(stub.received(), vec![json!({ "prompt": "Contact form" })]);
}

#[tokio::test]
async fn test_non_array_form_is_invalid_shape() {
    let stub = StubService::json(json!({ "form": "oops" })).await;
    let generator = HttpFormGenerator::new(&stub.base_url);

    let err = generator.generate("anything").await.unwrap_err();
    assert!(matches!(err, GenerationError::InvalidResponseShape(_)));
}

#[tokio::test]
async fn test_error_status_is_request_failure() {
    let stub = StubService::start(Reply::Json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "form": [] }),
    ))
    .await;
    let generator = HttpFormGenerator::new(&stub.base_url);

    let err = generator.generate("anything").await.unwrap_err();
    let GenerationError::RequestFailure(detail) = err else {
        panic!("expected request failure, got {:?}", err);
    };
    assert!(detail.contains("500"));
}

#[tokio::test]
async fn test_non_json_body_is_request_failure() {
    let stub = StubService::start(Reply::Text(StatusCode::OK, "<html>busy</html>")).await;
    let generator = HttpFormGenerator::new(&stub.base_url);

    let err = generator.generate("anything").await.unwrap_err();
    assert!(matches!(err, GenerationError::RequestFailure(_)));
}

#[tokio::test]
async fn test_submitter_against_service() {
    let good = StubService::json(json!({
        "form": [
            { "field_type": "checkbox", "label": "Agree", "default": true },
            { "field_type": "textarea", "label": "Comments" }
        ]
    }))
    .await;
    let submitter = PromptSubmitter::new(Arc::new(HttpFormGenerator::new(&good.base_url)));

    assert_eq!(submitter.submit("Feedback form").await, Applied::Rendered);

    let RenderedForm::Grid(controls) = submitter.rendered().await else {
        panic!("expected a grid");
    };
    assert_eq!(controls.len(), 2);
    assert_eq!(controls[0].shape, ControlShape::Checkbox { checked: true });
    assert!(matches!(controls[1].shape, ControlShape::TextArea { rows: 4, .. }));
    assert!(!submitter.is_busy().await);
}

#[tokio::test]
async fn test_invalid_response_preserves_rendered_fields() {
    let good = StubService::json(json!({ "form": [{ "field_type": "text", "label": "Name" }] })).await;
    let bad = StubService::json(json!({ "form": "oops" })).await;

    let session: SharedSession = Arc::new(RwLock::new(FormSession::new()));
    let first = PromptSubmitter::with_session(
        session.clone(),
        Arc::new(HttpFormGenerator::new(&good.base_url)),
    );
    let second = PromptSubmitter::with_session(
        session.clone(),
        Arc::new(HttpFormGenerator::new(&bad.base_url)),
    );

    first.submit("first").await;
    let applied = second.submit("second").await;

    let Applied::Notice(notice) = applied else {
        panic!("expected notice, got {:?}", applied);
    };
    assert_eq!(notice.message, "Invalid response from server.");

    let rendered = session.read().await.rendered();
    assert_eq!(rendered.controls().len(), 1);
    assert_eq!(rendered.controls()[0].label, "Name");
    assert!(!session.read().await.is_busy());
}
