//! API Errors
//!
//! Failure taxonomy for backend calls.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401: missing or expired token, or bad credentials at login
    #[error("unauthorized")]
    Unauthorized(Option<String>),
    /// Any other non-2xx response. `detail` holds the server message when it was a string.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("could not build request: {0}")]
    Build(String),
}

impl ApiError {
    /// Server-provided detail message, or `fallback`
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { detail: Some(detail), .. } | ApiError::Unauthorized(Some(detail)) => {
                detail.clone()
            }
            _ => fallback.to_string(),
        }
    }

    /// True when the failure came from the transport or a malformed body
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Decode(_) | ApiError::Build(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build the error for a failed response from its status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        if status == 401 {
            return ApiError::Unauthorized(detail);
        }
        ApiError::Rejected { status, detail }
    }
}

/// `{"detail": "..."}` -> the message. Structured details (validation lists) are ignored.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let err = ApiError::from_response(400, r#"{"detail":"Username already exists"}"#);
        assert_eq!(err.detail_or("Signup failed"), "Username already exists");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_structured_detail_falls_back() {
        let body = r#"{"detail":[{"loc":["body","password"],"msg":"too short"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.detail_or("Signup failed"), "Signup failed");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(err, ApiError::Rejected { status: 500, detail: None });
        assert_eq!(err.detail_or("Login failed"), "Login failed");
    }

    #[test]
    fn test_unauthorized() {
        let err = ApiError::from_response(401, r#"{"detail":"Invalid token"}"#);
        assert_eq!(err, ApiError::Unauthorized(Some("Invalid token".into())));
        assert_eq!(err.detail_or("Login failed"), "Invalid token");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_errors_use_fallback() {
        let err = ApiError::Network("offline".into());
        assert!(err.is_transport());
        assert_eq!(err.detail_or("Network error"), "Network error");
        assert_eq!(err.status(), None);
    }
}
