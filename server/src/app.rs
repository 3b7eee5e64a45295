//! App builder - wires settings and store together and runs the server

use std::sync::Arc;
use tokio::net::TcpListener;

use strata_core::{LayeredSettings, MemoryPropertyAdapter, StaticSettings};
use strata_types::property_adapter::PropertyAdapter;

use crate::prelude::*;
use crate::routes;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static setting holding the bearer token required for writes
pub const ADMIN_TOKEN: &str = "server.admin_token";

pub struct AppState {
	pub settings: LayeredSettings,
}

pub type App = Arc<AppState>;

/// Sets up `tracing` output filtered by `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.try_init();
}

pub struct AppBuilder {
	listen: Box<str>,
	static_settings: StaticSettings,
	property_adapter: Option<Arc<dyn PropertyAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			listen: "127.0.0.1:8080".into(),
			static_settings: StaticSettings::default(),
			property_adapter: None,
		}
	}

	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.listen = listen.into();
		self
	}
	pub fn static_settings(&mut self, static_settings: StaticSettings) -> &mut Self {
		self.static_settings = static_settings;
		self
	}
	pub fn property_adapter(&mut self, property_adapter: Arc<dyn PropertyAdapter>) -> &mut Self {
		self.property_adapter = Some(property_adapter);
		self
	}

	pub fn build(&mut self) -> App {
		let adapter = self.property_adapter.take().unwrap_or_else(|| {
			warn!("No property adapter configured, using a volatile in-memory store");
			Arc::new(MemoryPropertyAdapter::new()) as Arc<dyn PropertyAdapter>
		});
		let static_settings = std::mem::take(&mut self.static_settings);
		if static_settings.get(ADMIN_TOKEN).is_none_or(str::is_empty) {
			warn!("{} is not set, settings cannot be changed over HTTP", ADMIN_TOKEN);
		}
		if static_settings.encryption().secret_key_path().is_some()
			&& !static_settings.encryption().has_secret_key()
		{
			warn!("Secret key file configured but not found");
		}

		Arc::new(AppState { settings: LayeredSettings::new(static_settings, adapter) })
	}

	pub async fn run(&mut self) -> StResult<()> {
		info!("strata settings server V{}", VERSION);

		let app = self.build();
		let router = routes::init(app);

		let listener = TcpListener::bind(&*self.listen).await.inspect_err(|err| {
			error!("FATAL: cannot listen on {}: {}", self.listen, err);
		})?;
		info!("Listening on {}", self.listen);

		axum::serve(listener, router).await?;
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
