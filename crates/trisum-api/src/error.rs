use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use trisum_types::ErrorBody;

use crate::service::SummarizeError;

pub const TEXT_REQUIRED_MESSAGE: &str = "Text is required and must be a string";
pub const MALFORMED_RESPONSE_MESSAGE: &str =
    "Failed to process the AI response. The format may be incorrect.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred while generating the summary.";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body is too large";

/// Errors returned to HTTP callers
///
/// Provider details never reach the response body; they are logged where
/// the error is produced.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", PAYLOAD_TOO_LARGE_MESSAGE)]
    PayloadTooLarge,

    #[error("{}", MALFORMED_RESPONSE_MESSAGE)]
    MalformedResponse,

    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MalformedResponse | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::Validation => ApiError::BadRequest(TEXT_REQUIRED_MESSAGE.to_string()),
            SummarizeError::MalformedResponse { .. } => ApiError::MalformedResponse,
            SummarizeError::Provider(_) => ApiError::Internal,
        }
    }
}

/// Body buffering failures: over the configured limit, or an unreadable body
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::BadRequest(TEXT_REQUIRED_MESSAGE.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody::new(self.to_string()));
        (self.status(), body).into_response()
    }
}
