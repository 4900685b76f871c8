//! Environment-driven application configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Origins allowed to call the API from a browser; empty disables the CORS layer.
    pub cors_allowed_origins: Vec<String>,
    pub run_migrations: bool,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Variables
    /// - `DATABASE_URL` (required) - connection string for the relational store
    /// - `BIND_ADDRESS` (default `0.0.0.0:8080`) - socket address the HTTP server listens on
    /// - `CORS_ALLOWED_ORIGINS` (default empty) - comma separated origin allow-list
    /// - `RUN_MIGRATIONS` (default `true`) - apply pending migrations at start-up
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(value) => value.trim().parse::<bool>().map_err(|_| {
                ConfigError::InvalidEnvValue {
                    var: "RUN_MIGRATIONS".to_string(),
                    reason: format!("expected `true` or `false`, got `{}`", value),
                }
            })?,
        };

        Ok(Self {
            database_url,
            bind_address,
            cors_allowed_origins,
            run_migrations,
        })
    }
}
