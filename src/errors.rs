use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::dto::ApiResponse;

/// Errors surfaced to API clients
///
/// Validation errors are produced by handlers before any repository call.
/// Repository failures are classified per-operation into `NotFound`,
/// `EmailExists`, or `Internal`; the `Internal` variant keeps the original
/// error for logging but only ever leaks a generic detail string.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A path parameter that should be an integer did not parse
    #[error("{0}")]
    InvalidId(&'static str),

    /// A required body field was missing
    #[error("Invalid request body")]
    InvalidBody(&'static str),

    /// The email address is already taken by another user
    #[error("Email already exists")]
    EmailExists,

    /// No record matched the requested ID
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Any other failure; the cause is logged, never returned
    #[error("Internal server error")]
    Internal {
        cause: anyhow::Error,
        detail: &'static str,
    },
}

impl ApiError {
    /// Wraps an unexpected failure with the generic detail string for the
    /// operation that produced it
    pub fn internal(cause: impl Into<anyhow::Error>, detail: &'static str) -> Self {
        ApiError::Internal { cause: cause.into(), detail }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidId(message) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(message)),
            )
                .into_response(),
            ApiError::InvalidBody(detail) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error_with_detail(
                    "Invalid request body",
                    detail,
                )),
            )
                .into_response(),
            ApiError::EmailExists => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error("Email already exists")),
            )
                .into_response(),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error(format!("{} not found", what))),
            )
                .into_response(),
            ApiError::Internal { cause, detail } => {
                error!(error = %cause, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error_with_detail(
                        "Internal server error",
                        detail,
                    )),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests;
