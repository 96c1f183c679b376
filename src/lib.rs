//! # HappyForm
//!
//! HappyForm turns a natural-language prompt into a live HTML form. The
//! prompt goes to an external generation service, which answers with a list
//! of field descriptors; each descriptor is mapped to a form control.
//!
//! ## Features
//!
//! - **Web UI**: Leptos single-page app (`ui/`) served from this binary
//! - **Relay**: same-origin `/api/generate_form` forwarding to the service
//! - **One-shot mode**: `happyform --prompt "..."` prints the form as HTML
//! - **Health Checks**: `/health` and `/health/live`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use happyform::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     println!("prompts go to {}", settings.generate_form_url());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **happyform-core**: field model, renderer, session state (shared with the UI)
//! - **Adapters**: HTTP client, prompt submitter, axum handlers
//! - **Config**: configuration file, environment and CLI

pub mod adapters;
pub mod cli;
pub mod config;
pub mod one_shot;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::generation_client::HttpFormGenerator;
use crate::adapters::health_handler::HealthHandler;
use crate::config::Settings;
use axum::{
    routing::{get, post},
    Router,
};
use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Application settings
/// * `generator` - Client for the generation service, used by the relay
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(settings: Arc<Settings>, generator: Arc<HttpFormGenerator>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));

    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_state = ApiState {
        settings,
        generator,
    };

    let api_router = Router::new()
        .route("/config", get(api_handler::get_config))
        .route("/generate_form", post(api_handler::generate_form))
        .with_state(api_state);

    health_router
        .nest("/api", api_router)
        // UI endpoint (catch-all for the single page)
        .fallback(crate::adapters::ui_handler::UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}

/// Bind the host listener. `host` may be an IP address or a name such as
/// `localhost`.
pub async fn bind(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}
