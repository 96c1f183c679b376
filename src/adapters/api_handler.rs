//! REST API handlers backing the Web UI
//!
//! The UI posts prompts to `/api/generate_form`; the host relays them to the
//! configured generation service so the browser never needs cross-origin
//! access to it.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use happyform_core::GenerateFormRequest;

use crate::adapters::generation_client::HttpFormGenerator;
use crate::config::Settings;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<Settings>,
    pub generator: Arc<HttpFormGenerator>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigOverview {
    pub version: String,
    pub generation_endpoint: String,
}

/// GET /api/config
pub async fn get_config(State(state): State<ApiState>) -> impl IntoResponse {
    let overview = ConfigOverview {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generation_endpoint: state.settings.generate_form_url(),
    };
    (StatusCode::OK, Json(ApiResponse::success(overview)))
}

/// POST /api/generate_form
///
/// Relays the prompt and hands back the upstream status and JSON body
/// untouched, so the browser applies the same response contract it would
/// against the service directly.
pub async fn generate_form(
    State(state): State<ApiState>,
    Json(request): Json<GenerateFormRequest>,
) -> impl IntoResponse {
    info!(prompt_len = request.prompt.len(), "Relaying prompt to generation service");

    match state.generator.relay(&request).await {
        Ok(relayed) => {
            let status = StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::BAD_GATEWAY);
            if !status.is_success() {
                error!(status = %status, "Generation service returned an error status");
            }
            (status, Json(relayed.body)).into_response()
        }
        Err(e) => {
            error!(endpoint = %state.generator.endpoint(), "Relay to generation service failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response()
        }
    }
}
