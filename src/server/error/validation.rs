use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input rejected before reaching the store.
///
/// Carries the offending field name (as it appears on the wire) and a human readable reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new("body", rejection.body_text())
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        Self::new("id", rejection.body_text())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(field = %self.field, "{}", self.message);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
