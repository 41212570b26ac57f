//! Error types for the DogHouse service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Main error type for DogHouse operations.
#[derive(Error, Debug)]
pub enum DogHouseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request input failed validation
    #[error("{0}")]
    Validation(String),

    /// Request conflicts with existing state
    #[error("{0}")]
    Conflict(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for DogHouse operations.
pub type Result<T> = std::result::Result<T, DogHouseError>;

/// Translate domain errors into the service's single error envelope.
///
/// Validation failures map to 400, conflicts to 409, and everything else
/// to 500. The body is always `{"error": <message>}` so clients see one
/// consistent shape regardless of which layer rejected the request.
impl IntoResponse for DogHouseError {
    fn into_response(self) -> Response {
        let status = match self {
            DogHouseError::Validation(_) => StatusCode::BAD_REQUEST,
            DogHouseError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
