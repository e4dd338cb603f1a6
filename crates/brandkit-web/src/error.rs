//! HTTP error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use brandkit_core::BrandkitError;
use serde_json::json;

/// Error returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Body could not be read as a brand JSON object.
    InvalidRequest(String),
    /// Required brand fields are missing or blank.
    Validation { message: String, fields: Vec<String> },
    /// Generation failed despite valid input; details stay in the logs.
    Internal,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(rejection.body_text())
    }
}

impl From<BrandkitError> for ApiError {
    fn from(err: BrandkitError) -> Self {
        let message = err.to_string();
        match err {
            BrandkitError::Validation { fields } => Self::Validation { message, fields },
            other => {
                tracing::error!(error = %other, "Internal error while handling request");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "invalid_request", "message": message }),
            ),
            Self::Validation { message, fields } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "validation_error", "message": message, "fields": fields }),
            ),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "internal_error" }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
