use axum::{http::StatusCode, response::IntoResponse};
use sena_backend::server::controller::health::health;

use super::*;

/// Expect 200 with `ok` while the database answers
#[tokio::test]
async fn reports_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = health(axum::extract::State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = util::body_json(resp).await;
    assert_eq!(body["status"], "ok");

    Ok(())
}

/// Expect 500 once the database connection is closed
#[tokio::test]
async fn fails_when_database_closed() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state();
    test.db.clone().close().await?;

    let result = health(axum::extract::State(state)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
