use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reviews_types::ErrorResponse;

use super::json::{json_response, to_spaced};
use crate::error::ReviewError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        match to_spaced(&ErrorResponse { error: message }) {
            Ok(body) => json_response(status, body),
            Err(e) => {
                tracing::error!("Failed to encode error body: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

// Validation and parse failures look the same to the client.
impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
