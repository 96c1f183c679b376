use reqwest::Url;
use thiserror::Error;

use crate::config::{GenerationSettings, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_generation(&settings.generation) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_generation(generation: &GenerationSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if generation.base_url.trim().is_empty() {
            errors.push(ValidationError::MissingField(
                "generation.base_url".to_string(),
            ));
        } else {
            match Url::parse(&generation.base_url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(ValidationError::InvalidValue {
                    field: "generation.base_url".to_string(),
                    reason: format!("Unsupported scheme '{}', expected http or https", url.scheme()),
                }),
                Err(e) => errors.push(ValidationError::InvalidValue {
                    field: "generation.base_url".to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(port: u16, base_url: &str) -> Settings {
        Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port,
            },
            generation: GenerationSettings {
                base_url: base_url.to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config() {
        let result = ConfigValidator::validate(&settings(3000, "http://127.0.0.1:8000"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let result = ConfigValidator::validate(&settings(0, "http://127.0.0.1:8000"));
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("server.port"));
    }

    #[test]
    fn test_missing_base_url() {
        let errors = ConfigValidator::validate(&settings(3000, "  ")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::MissingField(_)));
    }

    #[test]
    fn test_base_url_must_be_http() {
        let errors = ConfigValidator::validate(&settings(3000, "ftp://forms.example")).unwrap_err();
        assert!(errors[0].to_string().contains("Unsupported scheme"));

        let errors = ConfigValidator::validate(&settings(3000, "not a url")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidValue { .. }));
    }
}
