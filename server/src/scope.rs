//! Per-request settings scope.
//!
//! The middleware opens a scope on a fresh [`SettingsContext`] before the
//! handler runs and closes it once the response is produced. Handlers reach
//! the context through the [`RequestSettings`] extractor.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tokio::sync::Mutex;

use strata_core::{LayeredSettings, SettingsContext};

use crate::prelude::*;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id, taken from `x-request-id` or generated
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Settings context of the current request
#[derive(Debug, Clone)]
pub struct RequestSettings {
	ctx: Arc<Mutex<SettingsContext>>,
}

impl RequestSettings {
	fn new(ctx: SettingsContext) -> Self {
		Self { ctx: Arc::new(Mutex::new(ctx)) }
	}

	pub async fn get(&self, settings: &LayeredSettings, key: &str) -> StResult<Option<String>> {
		let mut ctx = self.ctx.lock().await;
		settings.get(&mut ctx, key).await
	}

	pub async fn set(&self, settings: &LayeredSettings, key: &str, value: &str) -> bool {
		settings.set(&mut *self.ctx.lock().await, key, value)
	}

	pub async fn remove(&self, settings: &LayeredSettings, key: &str) -> bool {
		settings.remove(&mut *self.ctx.lock().await, key)
	}

	async fn close(&self, settings: &LayeredSettings) {
		settings.close_scope(&mut *self.ctx.lock().await);
	}
}

impl<S> FromRequestParts<S> for RequestSettings
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<RequestSettings>().cloned().ok_or_else(|| {
			error!("settings scope middleware is not installed");
			Error::Internal("no settings scope for request".into())
		})
	}
}

impl<S> FromRequestParts<S> for RequestId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts
			.extensions
			.get::<RequestId>()
			.cloned()
			.ok_or_else(|| Error::Internal("no request id".into()))
	}
}

pub async fn settings_scope(State(app): State<App>, mut req: Request, next: Next) -> Response {
	let req_id = req
		.headers()
		.get(REQUEST_ID_HEADER)
		.and_then(|v| v.to_str().ok())
		.filter(|v| !v.is_empty())
		.map_or_else(|| uuid::Uuid::new_v4().simple().to_string(), str::to_string);

	let mut ctx = SettingsContext::new(format!("req-{}", req_id));
	if let Err(err) = app.settings.open_scope(&mut ctx) {
		return err.into_response();
	}

	let settings = RequestSettings::new(ctx);
	req.extensions_mut().insert(settings.clone());
	req.extensions_mut().insert(RequestId(req_id));

	let res = next.run(req).await;
	settings.close(&app.settings).await;
	res
}

// vim: ts=4
