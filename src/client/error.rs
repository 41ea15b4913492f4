use reqwest::StatusCode;

use crate::utils::env::ConfigError;

/// Errors raised by the model security API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed ({status}): {body}")]
    Auth { status: StatusCode, body: String },

    #[error("API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::Config(err.to_string())
    }
}
