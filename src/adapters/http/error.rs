//! Error body shared by every endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::ports::SpeechError;

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// An error response paired with its status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(code, message),
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: ErrorResponse::new("SERVICE_UNAVAILABLE", message),
        }
    }
}

impl From<SpeechError> for ApiError {
    fn from(err: SpeechError) -> Self {
        let (status, code) = match &err {
            SpeechError::EmptyInput(_) => (StatusCode::BAD_REQUEST, "EMPTY_INPUT"),
            SpeechError::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT"),
            SpeechError::AuthenticationFailed
            | SpeechError::Provider { .. }
            | SpeechError::Network(_) => (StatusCode::BAD_GATEWAY, "SPEECH_PROVIDER_ERROR"),
        };
        Self {
            status,
            body: ErrorResponse::new(code, err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let response = ErrorResponse::new("EMPTY_MESSAGE", "message must not be empty");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "EMPTY_MESSAGE");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn speech_input_errors_are_client_errors() {
        let err = ApiError::from(SpeechError::EmptyInput("audio".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = ApiError::from(SpeechError::Network("reset".into()));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }
}
