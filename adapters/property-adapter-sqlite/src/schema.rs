//! Database schema initialization

use sqlx::SqlitePool;

/// Creates the property table if it does not exist yet
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Global properties. A NULL value is a configured-but-blank property.
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS properties (
		name text NOT NULL,
		value text,
		updated_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4
