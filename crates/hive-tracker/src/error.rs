//! Error types for the tracker

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Result type for request handlers
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Errors surfaced to clients
///
/// Each one ends the request it occurred in and never touches registry state.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Route exists but the method is wrong
    #[error("{0}")]
    MethodNotAllowed(&'static str),

    /// Body or query could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// File has never been registered
    #[error("File not found: {0}")]
    NotFound(String),
}

impl TrackerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            TrackerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TrackerError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<hive_core::Error> for TrackerError {
    fn from(err: hive_core::Error) -> Self {
        match err {
            hive_core::Error::NotFound(file) => TrackerError::NotFound(file),
            hive_core::Error::InvalidRequest(msg) => TrackerError::BadRequest(msg),
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        (self.status_code(), format!("{}\n", self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TrackerError::MethodNotAllowed("Only GET allowed").status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            TrackerError::BadRequest("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TrackerError::NotFound("a.txt".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_from_core_error() {
        let err: TrackerError = hive_core::Error::NotFound("a.txt".to_string()).into();
        assert!(matches!(err, TrackerError::NotFound(ref f) if f == "a.txt"));

        let err: TrackerError = hive_core::Error::InvalidRequest("empty".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
