//! API Error Type

use leptos_session::{HttpFailure, FORBIDDEN};
use serde::Deserialize;
use thiserror::Error;

pub const UNAUTHORIZED: u16 = 401;

/// `{"error": "..."}` body returned by the backend on validation failures
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response received
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Request could not be built (URL, body)
    #[error("invalid request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(FORBIDDEN)
    }

    /// 401 or 403: the session cookie is missing or rejected
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self.status(), Some(UNAUTHORIZED) | Some(FORBIDDEN))
    }

    /// Backend `error` text when there is one, `fallback` otherwise
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl HttpFailure for ApiError {
    fn http_status(&self) -> Option<u16> {
        self.status()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Request(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16(), message: None }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_text_is_kept() {
        let err = ApiError::from_response(404, r#"{"error": "Sprint name cannot be empty!"}"#);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message("fallback"), "Sprint name cannot be empty!");
        assert!(!err.is_forbidden());
    }

    #[test]
    fn test_unstructured_body_uses_fallback() {
        let err = ApiError::from_response(500, "<html>Internal Server Error</html>");
        assert_eq!(err, ApiError::Status { status: 500, message: None });
        assert_eq!(err.user_message("Failed to update project"), "Failed to update project");

        let blank = ApiError::from_response(400, r#"{"error": "  "}"#);
        assert_eq!(blank.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_forbidden_and_unauthenticated() {
        let forbidden = ApiError::from_response(403, "");
        assert!(forbidden.is_forbidden());
        assert!(forbidden.is_unauthenticated());
        assert_eq!(forbidden.http_status(), Some(403));

        let unauthorized = ApiError::from_response(401, r#"{"error": "Not authenticated"}"#);
        assert!(!unauthorized.is_forbidden());
        assert!(unauthorized.is_unauthenticated());

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.http_status(), None);
        assert_eq!(network.user_message("Something went wrong"), "Something went wrong");
    }

    #[test]
    fn test_display_includes_backend_message() {
        let err = ApiError::from_response(400, r#"{"error": "User not found"}"#);
        assert_eq!(err.to_string(), "request failed with status 400: User not found");
    }
}
