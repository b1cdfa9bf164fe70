use serde_json::Value;
use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum OcrolusError {
    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for OcrolusError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            OcrolusError::Network("Request timeout".to_string())
        } else if error.is_connect() {
            OcrolusError::Network(format!("Connection failed: {}", error))
        } else if error.is_decode() {
            OcrolusError::InvalidResponse(error.to_string())
        } else {
            OcrolusError::Network(error.to_string())
        }
    }
}

impl From<OcrolusError> for ApplicationError {
    fn from(error: OcrolusError) -> Self {
        match error {
            OcrolusError::Upstream { status, body } => {
                let details =
                    serde_json::from_str(&body).unwrap_or_else(|_| Value::String(body));
                ApplicationError::UpstreamError { status, details }
            }
            OcrolusError::Network(msg) | OcrolusError::InvalidResponse(msg) => {
                ApplicationError::InternalError(msg)
            }
        }
    }
}
