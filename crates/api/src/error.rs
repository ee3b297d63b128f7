use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskboard_db::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for store failures and implements [`IntoResponse`]
/// to produce consistent JSON error responses; nothing surfaces as an
/// unhandled rejection.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A typed store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Store(store) => match store {
                StoreError::Connection(msg) => {
                    tracing::error!(error = %msg, "Store unreachable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "STORE_UNAVAILABLE",
                        "The data store is unavailable".to_string(),
                    )
                }
                StoreError::ConstraintViolation { constraint, message } => {
                    tracing::warn!(constraint = %constraint, error = %message, "Constraint violation");
                    (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Write violates constraint: {constraint}"),
                    )
                }
                StoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                StoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal store error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
