use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - token missing or expired")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data.
    /// Bodies are arbitrary server output (proxy HTML, localized
    /// messages), so the cut must land on a char boundary.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            400 => ApiError::BadRequest(truncated),
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(truncated),
            404 => ApiError::NotFound(truncated),
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_pass_through_unchanged() {
        let err = ApiError::from_status(reqwest::StatusCode::NOT_FOUND, "Host not found");
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "Host not found"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn truncates_long_ascii_bodies() {
        let body = "x".repeat(600);
        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            ApiError::ServerError(msg) => {
                assert!(msg.starts_with(&"x".repeat(500)));
                assert!(msg.contains("truncated, 600 total bytes"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn truncates_multibyte_bodies_on_a_char_boundary() {
        // 200 three-byte chars: byte 500 falls inside a character, so
        // the cut must back up to byte 498 instead of panicking.
        let body = "你".repeat(200);
        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            ApiError::ServerError(msg) => {
                assert!(msg.starts_with(&"你".repeat(166)));
                assert!(!msg.starts_with(&"你".repeat(167)));
                assert!(msg.contains("truncated, 600 total bytes"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
