//! Client for the form generation endpoint

use gloo_net::http::Request;
use serde_json::Value;

use happyform_core::{
    generate_form_url, parse_generation_response, FormFieldList, GenerateFormRequest,
    GenerationError,
};

/// Base URL prompts are posted to, fixed when the UI is built.
///
/// Defaults to the relay exposed by the HappyForm host.
pub const API_BASE: &str = match option_env!("HAPPYFORM_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// Send a prompt and decode the generated field list
pub async fn generate_form(prompt: &str) -> Result<FormFieldList, GenerationError> {
    let url = generate_form_url(API_BASE);

    let response = Request::post(&url)
        .json(&GenerateFormRequest::new(prompt))
        .map_err(|e| GenerationError::RequestFailure(format!("Failed to serialize body: {}", e)))?
        .send()
        .await
        .map_err(|e| GenerationError::RequestFailure(format!("Request failed: {}", e)))?;

    if !response.ok() {
        return Err(GenerationError::RequestFailure(format!(
            "Server returned {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| GenerationError::RequestFailure(format!("Failed to parse response: {}", e)))?;

    parse_generation_response(&body)
}
