//! Database schema initialization
//!
//! Creates the store registry and the per-(store, module) settings table.

use sqlx::SqlitePool;

pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Stores
	//********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS stores (
		store_id integer NOT NULL,
		name text NOT NULL,
		created_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(store_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Module settings
	//*****************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS module_settings (
		store_id integer NOT NULL,
		module text NOT NULL,
		enabled boolean NOT NULL DEFAULT FALSE,
		settings text,
		PRIMARY KEY(store_id, module)
	)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
