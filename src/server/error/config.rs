use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Start-up failure reading `DATABASE_URL`, `BIND_ADDRESS`, `CORS_ALLOWED_ORIGINS` or
/// `RUN_MIGRATIONS` in [`Config::from_env`](crate::server::config::Config::from_env).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable without a default is unset or blank.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// A variable is set but cannot be parsed, e.g. a malformed socket address or origin.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
