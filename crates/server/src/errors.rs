use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// HTTP-facing error taxonomy. Every variant renders the shared response
/// envelope; nothing escapes to a framework default handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400, missing or malformed request fields.
    #[error("{0}")]
    Validation(String),
    /// 400, invalid-credential responses. Deliberately generic so a wrong
    /// password and an unknown username read the same.
    #[error("{0}")]
    AuthFailed(String),
    /// 403, missing/invalid/expired token or privilege violation.
    #[error("{0}")]
    Forbidden(String),
    /// 404, zero-affected-row mutation or empty lookup.
    #[error("{0}")]
    NotFound(String),
    /// 409, unique-constraint violation.
    #[error("{0}")]
    Conflict(String),
    /// 500. The detail is logged, never returned to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "statusCode": 400,
                    "isError": true,
                    "message": msg,
                    "statusText": msg,
                })),
            )
                .into_response(),
            // The login surface historically reported credential failures
            // with `isError: false` and a statusText; clients key on it.
            ApiError::AuthFailed(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "statusCode": 400,
                    "isError": false,
                    "responseData": null,
                    "statusText": msg,
                })),
            )
                .into_response(),
            ApiError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                Json(json!({
                    "statusCode": 403,
                    "isError": false,
                    "responseData": null,
                    "statusText": msg,
                })),
            )
                .into_response(),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "statusCode": 404,
                    "isError": true,
                    "message": msg,
                })),
            )
                .into_response(),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                Json(json!({
                    "statusCode": 409,
                    "isError": true,
                    "message": msg,
                })),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                error!(error = %detail, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "statusCode": 500,
                        "isError": true,
                        "message": "Internal server error",
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<service::errors::ServiceError> for ApiError {
    fn from(e: service::errors::ServiceError) -> Self {
        use service::errors::ServiceError;
        match e {
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Conflict => ApiError::Conflict("Form number is already added".into()),
            ServiceError::Db(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<service::auth::errors::AuthError> for ApiError {
    fn from(e: service::auth::errors::AuthError) -> Self {
        use service::auth::errors::AuthError;
        match e {
            AuthError::Validation(msg) => ApiError::Validation(msg),
            AuthError::Unauthorized => {
                ApiError::AuthFailed("INVALID USERNAME OR PASSWORD".into())
            }
            AuthError::Forbidden => ApiError::Forbidden("Forbidden".into()),
            AuthError::HashError(msg) | AuthError::TokenError(msg) | AuthError::Repository(msg) => {
                ApiError::Internal(msg)
            }
        }
    }
}
