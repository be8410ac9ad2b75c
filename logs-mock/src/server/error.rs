//! Mapping of library errors onto HTTP responses.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response::ErrorResponse;
use crate::Error;

/// Error response wrapper for converting [`Error`] to HTTP responses.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    /// HTTP status and machine-readable error type for this error.
    pub fn status_and_type(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            Error::InvalidCursor(_) => (StatusCode::BAD_REQUEST, "invalid_cursor"),
            Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, "bad_data"),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();
        let body = ErrorResponse::new(error_type, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(Error::InvalidInput(rejection.body_text()))
    }
}
