//! Error types for form generation

use thiserror::Error;

/// Ways a generation request can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The service answered, but the body is not `{ "form": [...] }`
    #[error("Invalid response shape: {0}")]
    InvalidResponseShape(String),

    /// Transport error, non-success status or undecodable body
    #[error("Request failed: {0}")]
    RequestFailure(String),
}

impl GenerationError {
    /// Message shown to the person who submitted the prompt
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::InvalidResponseShape(_) => "Invalid response from server.",
            GenerationError::RequestFailure(_) => {
                "Something went wrong while generating the form."
            }
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::RequestFailure(format!("Failed to decode response body: {}", err))
    }
}

/// Result type alias for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;
