//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::repository::RepositoryError;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Resource Errors**: Requested transaction does not exist
/// - **Validation Errors**: Malformed request body or path
/// - **Storage Errors**: Any failure inside the repository
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No transaction with the given id exists.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Transaction {0} not found")]
    NotFound(i64),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("{0}")]
    Validation(String),

    /// Request body exceeds the accepted size.
    ///
    /// Returns HTTP 413 Payload Too Large.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Storage operation failed.
    ///
    /// Returns HTTP 500. The cause is logged but never sent to the client.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "transaction_not_found",
            AppError::Validation(_) => "invalid_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Repository(_) => "internal_error",
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `NotFound` → 404 Not Found
/// - `Validation` → 400 Bad Request
/// - `PayloadTooLarge` → 413 Payload Too Large
/// - `Repository` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let message = match &self {
            AppError::Repository(err) => {
                tracing::error!(error = %err, "Repository failure");
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
