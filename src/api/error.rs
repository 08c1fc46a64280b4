use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;

use crate::errors::ServiceError;

/// JSON error body returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServiceError::MissingInput(msg) => (
                StatusCode::NOT_FOUND,
                ApiError::new("NOT_FOUND", msg.clone()),
            ),
            ServiceError::UpstreamUnavailable(_) | ServiceError::UnexpectedTransform(_) => {
                error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", "Failed to load results"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
