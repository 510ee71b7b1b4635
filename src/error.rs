//! Error types shared by the store and HTTP layers.
//!
//! Handlers return `Result<_, AppError>`; the `IntoResponse` impl turns each
//! variant into the matching HTTP status with a JSON error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// An id-keyed lookup found no row (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// The request shape failed a presence check (HTTP 400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A store failure already reduced to a generic message (HTTP 500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Any failure surfaced by the store driver (HTTP 500).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            AppError::Internal(ref msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    msg.clone(),
                )
            }
            AppError::Database(ref e) => {
                // The driver error is logged here; clients only see a
                // generic message.
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "a database error occurred".to_string(),
                )
            }
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
