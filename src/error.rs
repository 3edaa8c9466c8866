use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use sea_orm::DbErr;
use tracing::error;

use crate::schemas::ErrorBody;

/// Unified error type for the whole request path.
///
/// Every handler and repository call returns this, and the [`IntoResponse`]
/// impl below is the single place where errors become HTTP responses. All
/// bodies share the `{"error": "..."}` shape described in the OpenAPI
/// documentation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or invalid request body, maps to 400.
    #[error("{0}")]
    BadRequest(String),

    /// The addressed entity does not exist, maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule rejected the write, maps to 409.
    #[error("{0}")]
    Conflict(String),

    /// The requesting user is not entitled to the operation, maps to 403.
    #[error("{0}")]
    Forbidden(String),

    /// Any database failure that is not a uniqueness violation.
    #[error(transparent)]
    Database(#[from] DbErr),

    /// Failures inside the application itself, such as password hashing.
    #[error("{0}")]
    Internal(String),
}

impl From<argon2::password_hash::Error> for ApiError {
    fn from(err: argon2::password_hash::Error) -> Self {
        ApiError::Internal(format!("password hashing failed: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            ApiError::Database(err) => {
                error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Internal(message) => {
                error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
