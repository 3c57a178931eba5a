//! MediaConvert client error types.

use mcv_models::{MarshalError, ValidationErrors};
use thiserror::Error;

/// Result type for MediaConvert operations.
pub type MediaConvertResult<T> = Result<T, MediaConvertError>;

/// Errors that can occur while calling the service.
#[derive(Debug, Error)]
pub enum MediaConvertError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Too many requests: {message}")]
    TooManyRequests {
        message: String,
        retry_after_ms: Option<u64>,
    },

    #[error("Internal server error ({0}): {1}")]
    InternalServerError(u16, String),

    #[error("Unexpected response ({0}): {1}")]
    UnexpectedStatus(u16, String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Marshalling failed: {0}")]
    Marshal(#[from] MarshalError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

impl MediaConvertError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn signing(msg: impl Into<String>) -> Self {
        Self::Signing(msg.into())
    }

    /// Map an error response onto the matching variant.
    ///
    /// The service reports its message in a `message` (or `Message`) JSON
    /// field; anything else is kept verbatim.
    pub fn from_http_status(status: u16, body: &str) -> Self {
        let message = service_message(body).unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {}", status)
            } else {
                trimmed.to_string()
            }
        });

        match status {
            400 => Self::BadRequest(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            429 => Self::TooManyRequests {
                message,
                retry_after_ms: None,
            },
            500..=599 => Self::InternalServerError(status, message),
            _ => Self::UnexpectedStatus(status, message),
        }
    }

    /// Attach a `Retry-After` delay to a throttling error.
    pub fn with_retry_after(self, delay_ms: Option<u64>) -> Self {
        match self {
            Self::TooManyRequests { message, .. } => Self::TooManyRequests {
                message,
                retry_after_ms: delay_ms,
            },
            other => other,
        }
    }

    /// Check if error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MediaConvertError::Network(_)
                | MediaConvertError::TooManyRequests { .. }
                | MediaConvertError::InternalServerError(..)
        )
    }

    /// Server-requested delay before the next attempt.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            MediaConvertError::TooManyRequests { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }

    /// HTTP status this error corresponds to, if it came from a response.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            MediaConvertError::BadRequest(_) => Some(400),
            MediaConvertError::Forbidden(_) => Some(403),
            MediaConvertError::NotFound(_) => Some(404),
            MediaConvertError::Conflict(_) => Some(409),
            MediaConvertError::TooManyRequests { .. } => Some(429),
            MediaConvertError::InternalServerError(status, _)
            | MediaConvertError::UnexpectedStatus(status, _) => Some(*status),
            MediaConvertError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn service_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("message")
        .or_else(|| json.get("Message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
