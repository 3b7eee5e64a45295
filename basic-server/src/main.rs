use std::{env, path, sync::Arc};

use strata::{AppBuilder, init_logging};
use strata_core::StaticSettingsLoader;
use strata_property_adapter_sqlite::PropertyAdapterSqlite;
use strata_types::error::StResult;

pub struct Config {
	pub config_file: Option<path::PathBuf>,
	pub db_dir: path::PathBuf,
	pub listen: String,
}

#[tokio::main]
async fn main() -> StResult<()> {
	init_logging();

	let config = Config {
		config_file: env::var_os("CONFIG_FILE").map(path::PathBuf::from),
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
		listen: env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
	};

	// config file < STRATA_* environment < key=value arguments
	let mut loader = StaticSettingsLoader::new();
	if let Some(config_file) = &config.config_file {
		loader.file(config_file)?;
	}
	let static_settings = loader.env().overrides(env::args().skip(1))?.build();
	tracing::info!("{} static settings loaded", static_settings.all_entries().len());

	let property_adapter = Arc::new(PropertyAdapterSqlite::new(&config.db_dir).await?);

	let mut builder = AppBuilder::new();
	builder.listen(config.listen).static_settings(static_settings).property_adapter(property_adapter);
	builder.run().await
}

// vim: ts=4
