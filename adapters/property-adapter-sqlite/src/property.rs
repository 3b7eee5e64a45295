//! Property key-value store queries

use sqlx::{Row, SqlitePool};

use strata_types::prelude::*;

use crate::inspect;

/// List every property, null values included
pub(crate) async fn list(db: &SqlitePool) -> StResult<Vec<StoredProperty>> {
	let rows = sqlx::query("SELECT name, value FROM properties ORDER BY name")
		.fetch_all(db)
		.await
		.map_err(inspect)?;

	rows.into_iter()
		.map(|row| -> StResult<StoredProperty> {
			Ok(StoredProperty {
				key: row.try_get("name").map_err(inspect)?,
				value: row.try_get("value").map_err(inspect)?,
			})
		})
		.collect()
}

/// Read a single property by name
pub(crate) async fn read(db: &SqlitePool, name: &str) -> StResult<Option<StoredProperty>> {
	let row = sqlx::query("SELECT value FROM properties WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.map_err(inspect)?;

	row.map(|row| -> StResult<StoredProperty> {
		Ok(StoredProperty { key: name.to_string(), value: row.try_get("value").map_err(inspect)? })
	})
	.transpose()
}

/// Insert or replace a property
pub(crate) async fn upsert(db: &SqlitePool, name: &str, value: Option<&str>) -> StResult<()> {
	sqlx::query(
		"INSERT INTO properties (name, value, updated_at) VALUES (?, ?, unixepoch())
		ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
	)
	.bind(name)
	.bind(value)
	.execute(db)
	.await
	.map_err(inspect)?;

	Ok(())
}

/// Delete a property (missing names are ignored)
pub(crate) async fn delete(db: &SqlitePool, name: &str) -> StResult<()> {
	sqlx::query("DELETE FROM properties WHERE name = ?")
		.bind(name)
		.execute(db)
		.await
		.map_err(inspect)?;

	Ok(())
}

// vim: ts=4
