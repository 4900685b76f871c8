//! Process start-up: logging, database connection and HTTP middleware.

use axum::http::{header, HeaderValue, Method};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
};

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "sena_backend=info,tower_http=info";

/// Install the global `tracing` subscriber, filtered by `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to the database and, unless disabled, run pending migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(db)
}

/// Build the CORS layer for the configured origin allow-list
///
/// Returns `None` when no origins are configured, in which case cross-origin requests are
/// not answered with CORS headers at all.
pub fn build_cors_layer(config: &Config) -> Result<Option<CorsLayer>, Error> {
    if config.cors_allowed_origins.is_empty() {
        return Ok(None);
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvValue {
                var: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("{}: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]);

    Ok(Some(cors))
}
