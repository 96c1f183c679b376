//! HTTP client for the external form generation service

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use happyform_core::{
    generate_form_url, parse_generation_response, FormFieldList, GenerateFormRequest,
    GenerationError, GenerationResult,
};

use crate::config::Settings;

/// Longest upstream error body kept in diagnostics
const MAX_ERROR_BODY: usize = 512;

/// Anything that can turn a prompt into a field list
#[async_trait]
pub trait FormGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GenerationResult<FormFieldList>;
}

/// A response relayed verbatim from the generation service
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    /// Upstream HTTP status code
    pub status: u16,
    pub body: Value,
}

/// Generation service reached over HTTP.
///
/// No timeout is configured: a request waits until the transport resolves
/// or fails.
#[derive(Debug, Clone)]
pub struct HttpFormGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFormGenerator {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: generate_form_url(base_url),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.generation.base_url)
    }

    /// Full URL prompts are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a request body and return whatever JSON the service answered
    /// with, whatever the status.
    pub async fn relay(&self, request: &GenerateFormRequest) -> GenerationResult<RelayedResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(request_failure)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(request_failure)?;
        let body = serde_json::from_slice(&bytes)?;

        Ok(RelayedResponse { status, body })
    }
}

#[async_trait]
impl FormGenerator for HttpFormGenerator {
    async fn generate(&self, prompt: &str) -> GenerationResult<FormFieldList> {
        debug!(endpoint = %self.endpoint, prompt_len = prompt.len(), "Requesting form generation");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GenerateFormRequest::new(prompt))
            .send()
            .await
            .map_err(request_failure)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerationError::RequestFailure(format!(
                "Generation service returned {}: {}",
                status,
                truncate(&text, MAX_ERROR_BODY)
            )));
        }

        let bytes = response.bytes().await.map_err(request_failure)?;
        let body: Value = serde_json::from_slice(&bytes)?;
        let fields = parse_generation_response(&body)?;

        debug!(
            entries = fields.len(),
            renderable = fields.renderable_count(),
            "Generation service returned form"
        );
        Ok(fields)
    }
}

fn request_failure(err: reqwest::Error) -> GenerationError {
    if err.is_connect() {
        GenerationError::RequestFailure(format!("Connection error: {}", err))
    } else {
        GenerationError::RequestFailure(err.to_string())
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
