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

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Invalid or missing API keys
/// - **Resource Errors**: Requested catalog entries not found
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// API key is missing, invalid, or inactive.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Requested job title does not exist or has been deactivated.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Job title not found")]
    JobTitleNotFound,

    /// Requested country code is not in the catalog.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Country not found")]
    CountryNotFound,

    /// Requested IANA timezone name is not in the catalog.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Timezone not found")]
    TimezoneNotFound,

    /// Requested language code is not in the catalog.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Language not found")]
    LanguageNotFound,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
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
/// - `InvalidApiKey` → 401 Unauthorized
/// - `JobTitleNotFound` / `CountryNotFound` / `TimezoneNotFound` /
///   `LanguageNotFound` → 404 Not Found
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                "invalid_api_key",
                self.to_string(),
            ),
            AppError::JobTitleNotFound => (
                StatusCode::NOT_FOUND,
                "job_title_not_found",
                self.to_string(),
            ),
            AppError::CountryNotFound => {
                (StatusCode::NOT_FOUND, "country_not_found", self.to_string())
            }
            AppError::TimezoneNotFound => (
                StatusCode::NOT_FOUND,
                "timezone_not_found",
                self.to_string(),
            ),
            AppError::LanguageNotFound => (
                StatusCode::NOT_FOUND,
                "language_not_found",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
