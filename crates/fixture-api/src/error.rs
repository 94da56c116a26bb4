//! API error types and conversions

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fixture_core::Rejection;
use serde::Serialize;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - a check refused the input
    Rejected(Rejection),
    /// 413 Payload Too Large - body exceeded the request size limit
    PayloadTooLarge(String),
    /// 422 Unprocessable Entity - body could not be parsed into fields
    Unprocessable(String),
    /// 500 Internal Server Error
    Internal(String),
}

/// Error body; clients read the `detail` field
#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Rejected(reason) => reason.to_string(),
            ApiError::PayloadTooLarge(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        match self {
            ApiError::Rejected(_) => tracing::warn!(%detail, "Request rejected"),
            ApiError::PayloadTooLarge(_) => tracing::warn!(%detail, "Request body too large"),
            ApiError::Unprocessable(_) => tracing::debug!(%detail, "Unprocessable request body"),
            ApiError::Internal(_) => tracing::error!(%detail, "Internal error"),
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<Rejection> for ApiError {
    fn from(reason: Rejection) -> Self {
        ApiError::Rejected(reason)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(err.body_text())
        } else {
            ApiError::Unprocessable(err.body_text())
        }
    }
}
