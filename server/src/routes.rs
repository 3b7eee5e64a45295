use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::prelude::*;
use crate::{handler, scope};

pub fn init(app: App) -> Router {
	Router::new()
		.route("/api/settings", get(handler::list_settings).patch(handler::patch_settings))
		.route("/api/settings/{key}", get(handler::get_setting).put(handler::put_setting))
		.layer(middleware::from_fn_with_state(app.clone(), scope::settings_scope))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4
