//! Helpers turning a [`TestContext`] into application state and routers.

use axum::{body::Body, http::Request, response::Response, Router};
use sena_backend::server::{model::app::AppState, router};
use sena_test_utils::TestContext;
use tower::ServiceExt;

/// Extension trait for TestContext to build the application on top of its database
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Full application router, as served in production minus the middleware layers
    fn app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn app(&self) -> Router {
        router::routes().with_state(self.into_app_state())
    }
}

/// Sends a single request through the router.
pub async fn send(app: Router, request: Request<Body>) -> Response {
    match app.oneshot(request).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    }
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
