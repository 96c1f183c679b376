//! Wire contract of the `generate_form` endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GenerationError, GenerationResult};
use crate::field::FormFieldList;

/// Path appended to the service base URL
pub const GENERATE_FORM_PATH: &str = "/generate_form";

/// Request body for `POST {base_url}/generate_form`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFormRequest {
    pub prompt: String,
}

impl GenerateFormRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Join a base URL and the endpoint path, tolerating a trailing slash
pub fn generate_form_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), GENERATE_FORM_PATH)
}

/// Validate a successful response body and decode its field list.
///
/// Only the presence of an array under `form` is checked; individual
/// entries are decoded leniently.
pub fn parse_generation_response(body: &Value) -> GenerationResult<FormFieldList> {
    match body.get("form") {
        Some(Value::Array(items)) => Ok(FormFieldList::from_values(items)),
        Some(other) => Err(GenerationError::InvalidResponseShape(format!(
            "`form` is {}, expected an array",
            json_type_name(other)
        ))),
        None => Err(GenerationError::InvalidResponseShape(
            "missing `form` field".to_string(),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
