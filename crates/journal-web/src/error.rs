//! Error types for the journal web interface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur in the journal web interface.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// No valid session for a page that needs one.
    #[error("Not signed in")]
    Unauthorized,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(err) => {
                tracing::error!("Database error: {}", err);
                error_json(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            // Session-gated pages bounce back to the login view.
            AppError::Unauthorized => Redirect::to("/").into_response(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_json(StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        }
    }
}

fn error_json(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({
        "error": message
    });
    (status, Json(body)).into_response()
}

/// Result type for handler operations.
pub type Result<T> = std::result::Result<T, AppError>;
