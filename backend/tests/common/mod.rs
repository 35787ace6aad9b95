// Not every helper is used in every test binary
#![allow(unused_imports, dead_code)]

mod dynamodb_setup;
pub use dynamodb_setup::*;
mod test_router;
pub use test_router::*;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;

/// Initializes tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Builds a JSON request for the test router
pub fn json_request(method: &str, path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Builds a bodyless request for the test router
pub fn bare_request(method: &str, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Collects a response body into JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}
