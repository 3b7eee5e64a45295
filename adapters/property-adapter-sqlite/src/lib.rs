//! SQLite implementation of the Strata property store.
//!
//! Properties live in a single `properties` table in `properties.db` inside the
//! configured directory.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use strata_types::prelude::*;

mod property;
mod schema;

pub const DB_FILE: &str = "properties.db";

fn inspect(err: sqlx::Error) -> Error {
	warn!("DB: {:#?}", err);
	Error::StoreUnavailable(err.to_string())
}

#[derive(Debug)]
pub struct PropertyAdapterSqlite {
	db: SqlitePool,
}

impl PropertyAdapterSqlite {
	/// Opens (creating if needed) the property database under `dir`
	pub async fn new(dir: impl AsRef<Path>) -> StResult<Self> {
		let dir = dir.as_ref();
		tokio::fs::create_dir_all(dir).await?;

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(dir.join(DB_FILE))
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.map_err(inspect)?;

		schema::init_db(&db).await.map_err(inspect)?;
		info!("property store opened at {}", dir.join(DB_FILE).display());

		Ok(Self { db })
	}
}

#[async_trait]
impl PropertyAdapter for PropertyAdapterSqlite {
	async fn read_property(&self, key: &str) -> StResult<Option<StoredProperty>> {
		property::read(&self.db, key).await
	}

	async fn list_properties(&self) -> StResult<Vec<StoredProperty>> {
		property::list(&self.db).await
	}

	async fn upsert_property(&self, key: &str, value: Option<&str>) -> StResult<()> {
		property::upsert(&self.db, key, value).await
	}

	async fn delete_property(&self, key: &str) -> StResult<()> {
		property::delete(&self.db, key).await
	}
}

// vim: ts=4
