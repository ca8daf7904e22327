use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use adforge_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `adforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status this error maps to, used for audit rows.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                CoreError::Forbidden(_) => StatusCode::FORBIDDEN,
                CoreError::Unparseable { .. } | CoreError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    ("NOT_FOUND", format!("{entity} with id {id} not found"))
                }
                CoreError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
                CoreError::Unauthorized(msg) => ("UNAUTHORIZED", msg.clone()),
                CoreError::Forbidden(msg) => ("FORBIDDEN", msg.clone()),
                // The excerpt is surfaced deliberately: operators diagnose
                // malformed provider output from this message.
                CoreError::Unparseable { excerpt } => (
                    "UNPARSEABLE_AI_OUTPUT",
                    format!("AI response could not be parsed as JSON. Output began: {excerpt}"),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    ("INTERNAL_ERROR", "An internal error occurred".to_string())
                }
            },
            AppError::Database(sqlx::Error::RowNotFound) => {
                ("NOT_FOUND", "Resource not found".to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
            AppError::BadRequest(msg) => ("BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
