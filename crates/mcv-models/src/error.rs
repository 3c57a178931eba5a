//! Model-layer error types.

use thiserror::Error;

/// Failure to map a wire token onto an enumeration variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    #[error("{kind} value cannot be empty")]
    Empty { kind: &'static str },

    #[error("Unknown {kind} value: {value:?}")]
    Unknown { kind: &'static str, value: String },
}

impl ParseEnumError {
    pub fn empty(kind: &'static str) -> Self {
        Self::Empty { kind }
    }

    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Unknown {
            kind,
            value: value.into(),
        }
    }

    /// Name of the enumeration that rejected the token.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseEnumError::Empty { kind } | ParseEnumError::Unknown { kind, .. } => kind,
        }
    }
}

/// Result type for request marshalling.
pub type MarshalResult<T> = Result<T, MarshalError>;

/// Failure to turn a request model into an HTTP request.
#[derive(Debug, Error)]
pub enum MarshalError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MarshalError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseEnumError::unknown("H264CodecLevel", "LEVEL_9");
        assert_eq!(err.to_string(), "Unknown H264CodecLevel value: \"LEVEL_9\"");
        assert_eq!(err.kind(), "H264CodecLevel");

        let err = ParseEnumError::empty("JobStatus");
        assert_eq!(err.to_string(), "JobStatus value cannot be empty");
    }

    #[test]
    fn test_marshal_error_message() {
        let err = MarshalError::missing("id");
        assert_eq!(err.to_string(), "Missing required field: id");
    }
}
