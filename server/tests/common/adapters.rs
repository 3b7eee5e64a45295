//! Test app builders and request helpers
//!
//! Each test gets its own in-memory property store, returned next to the
//! router so the test can seed it, inspect it, or switch it off.

use axum::{Router, body::Body, http::Request, http::StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use strata::{AppBuilder, routes};
use strata_core::{MemoryPropertyAdapter, StaticSettings};

use super::fixtures::ADMIN_TOKEN;

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

pub fn create_test_app(system: StaticSettings) -> (Router, Arc<MemoryPropertyAdapter>) {
	setup_test_logging();
	let store = Arc::new(MemoryPropertyAdapter::new());
	let app = AppBuilder::new().static_settings(system).property_adapter(store.clone()).build();
	(routes::init(app), store)
}

pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
	let res = router.clone().oneshot(req).await.expect("request failed");
	let status = res.status();
	let bytes = res.into_body().collect().await.expect("body failed").to_bytes();
	let body = if bytes.is_empty() {
		serde_json::Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("body is not JSON")
	};
	(status, body)
}

pub fn get(uri: &str) -> Request<Body> {
	Request::get(uri).body(Body::empty()).expect("bad request")
}

pub fn write(method: &str, uri: &str, token: Option<&str>, body: &serde_json::Value) -> Request<Body> {
	let mut builder =
		Request::builder().method(method).uri(uri).header("content-type", "application/json");
	if let Some(token) = token {
		builder = builder.header("authorization", format!("Bearer {}", token));
	}
	builder.body(Body::from(body.to_string())).expect("bad request")
}

pub fn admin_write(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
	write(method, uri, Some(ADMIN_TOKEN), body)
}
