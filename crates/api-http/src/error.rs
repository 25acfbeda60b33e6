//! HTTP Error Mapping
//!
//! Maps the domain error taxonomy to HTTP status codes. Store failures
//! surface as a generic 500 so no persistence detail leaks to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use faq_core::error::AppError;
use serde::Serialize;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Router-level error type
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request detected before any service call (bad id, bad JSON)
    BadRequest(String),
    /// Classified outcome from the service layer
    App(AppError),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError::App(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::App(AppError::BadRequest(msg)) => (StatusCode::BAD_REQUEST, msg),
            ApiError::App(AppError::NotFound(msg)) => (StatusCode::NOT_FOUND, msg),
            ApiError::App(err) => {
                // Database/Config/Internal: log the cause, answer generically
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
