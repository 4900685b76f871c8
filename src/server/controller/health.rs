use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{error::Error, model::app::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Report whether the API can reach its database
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = HealthDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    state.db.ping().await?;

    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    ))
}
