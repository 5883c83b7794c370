use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::entities::ValidationError;

/// Unified application error type that maps to JSON HTTP responses.
///
/// Every variant renders as `{ "error": "<message>" }`.
#[derive(Debug)]
pub enum AppError {
    /// 400 Bad Request
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error (logs details, returns generic message)
    Internal(anyhow::Error),
}

impl AppError {
    /// A failed write. The store's message is surfaced to the caller as-is.
    pub fn write_failed(err: sea_orm::DbErr) -> Self {
        tracing::warn!(error = %err, "write rolled back");
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(err) => {
                tracing::error!("Internal server error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!(error = %err, "validation failed, write rolled back");
        Self::BadRequest(err.to_string())
    }
}

/// Store failures on read paths are unexpected and reported as 500.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Internal(err.into())
    }
}
