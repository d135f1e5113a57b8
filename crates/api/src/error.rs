use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use inventory_core::error::CoreError;

use crate::views::ErrorPage;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus the database and template
/// failures a handler can hit.
/// Implements [`IntoResponse`] to produce a consistent HTML error page.
///
/// Expected outcomes (invalid forms, unknown references, uniqueness
/// conflicts) are handled inside the handlers with a redirect and a notice;
/// only failures the user cannot fix reach this type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `inventory_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    /// Classify this error into an HTTP status and a user-safe message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        let page = ErrorPage {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: &message,
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Error page failed to render");
                (status, message).into_response()
            }
        }
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations on `uq_*` constraints map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        err if inventory_db::is_unique_violation(err) => (
            StatusCode::CONFLICT,
            "Duplicate value violates a uniqueness rule".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}
