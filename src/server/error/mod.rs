//! Error types for the SENA backend.
//!
//! Business operations fail in exactly three ways: the input was invalid
//! ([`ValidationError`], 400), the requested row does not exist ([`Error::NotFound`], 404), or
//! the store could not complete the operation ([`Error::ServiceUnavailable`], 500). Every
//! error implements `IntoResponse` and is rendered as an [`ErrorDto`] body.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Main error type for the SENA backend.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed input: non-positive id, blank required field, unparseable body.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No row of `entity` has the requested id.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// The store failed while performing `operation` on `entity`.
    ///
    /// The underlying database error is kept as the source so it can be logged, but it is never
    /// sent to the client.
    #[error("Failed to {operation} {entity}")]
    ServiceUnavailable {
        entity: &'static str,
        operation: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
    /// Database error outside of a business operation (start-up, health checks).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Listener or socket failure while serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn service_unavailable(
        entity: &'static str,
        operation: &'static str,
        source: sea_orm::DbErr,
    ) -> Self {
        Self::ServiceUnavailable {
            entity,
            operation,
            source,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation errors
/// - 404 Not Found - For ids without a matching row
/// - 500 Internal Server Error - For store and configuration failures
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::NotFound { entity, id } => {
                tracing::debug!(entity = entity, id = id, "Requested row not found");

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        message: format!("{} with id {} not found", entity, id),
                    }),
                )
                    .into_response()
            }
            Self::ServiceUnavailable {
                entity,
                operation,
                source,
            } => {
                // Already logged with full context by the service raising it
                tracing::debug!(
                    entity = entity,
                    operation = operation,
                    error = %source,
                    "Responding with store failure"
                );

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        message: format!("Failed to {} {}", operation, entity),
                    }),
                )
                    .into_response()
            }
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
