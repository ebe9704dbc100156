use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::scoring::ValidationError;

/// Errors surfaced to HTTP callers.
///
/// Bodies are plain text; the `Display` output is what the caller sees.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error reading request body. Please verify input.")]
    UnreadableBody(String),

    #[error("Invalid JSON format. Please verify input.")]
    MalformedRequestBody(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Receipt not found")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnreadableBody(_)
            | ApiError::MalformedRequestBody(_)
            | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
