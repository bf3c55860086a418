//! SQLite-backed settings store gateway and store directory
//!
//! One JSON settings blob plus an `enabled` flag per (store, module) pair.
//! Writes are single-statement `INSERT OR REPLACE`, so a stored document is
//! always replaced wholesale or left untouched.

use async_trait::async_trait;
use sqlx::{
	Row,
	sqlite::{self, SqlitePool},
};
use std::path::Path;

use consent::prelude::*;
use consent::settings_adapter::{ModuleSettings, SettingsAdapter};
use consent::store_directory::{Store, StoreDirectory};

mod schema;

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> CcResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}

	/// Registers a store in the directory (provisioning helper)
	pub async fn create_store(&self, store_id: StoreId, name: &str) -> CcResult<()> {
		sqlx::query("INSERT OR IGNORE INTO stores (store_id, name) VALUES (?, ?)")
			.bind(store_id.0)
			.bind(name)
			.execute(&self.db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
		Ok(())
	}

	/// Removes a store and all of its module settings
	pub async fn delete_store(&self, store_id: StoreId) -> CcResult<()> {
		let mut tx = self.db.begin().await.map_err(|_| Error::DbError)?;
		sqlx::query("DELETE FROM module_settings WHERE store_id = ?")
			.bind(store_id.0)
			.execute(&mut *tx)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
		sqlx::query("DELETE FROM stores WHERE store_id = ?")
			.bind(store_id.0)
			.execute(&mut *tx)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
		tx.commit().await.map_err(|_| Error::DbError)?;
		Ok(())
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	async fn read_module_settings(
		&self,
		store_id: StoreId,
		module: &str,
	) -> CcResult<Option<ModuleSettings>> {
		let row = sqlx::query(
			"SELECT enabled, settings FROM module_settings WHERE store_id = ? AND module = ?",
		)
		.bind(store_id.0)
		.bind(module)
		.fetch_optional(&self.db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

		let Some(row) = row else { return Ok(None) };

		let enabled: bool = row.try_get("enabled").map_err(|_| Error::DbError)?;
		let settings: Option<String> = row.try_get("settings").map_err(|_| Error::DbError)?;
		let settings = settings
			.and_then(|s| serde_json::from_str(&s).ok())
			.unwrap_or(serde_json::Value::Null);

		Ok(Some(ModuleSettings { enabled, settings }))
	}

	async fn write_module_settings(
		&self,
		store_id: StoreId,
		module: &str,
		settings: &ModuleSettings,
	) -> CcResult<()> {
		let value_str = settings.settings.to_string();
		sqlx::query(
			"INSERT OR REPLACE INTO module_settings (store_id, module, enabled, settings)
			VALUES (?, ?, ?, ?)",
		)
		.bind(store_id.0)
		.bind(module)
		.bind(settings.enabled)
		.bind(value_str)
		.execute(&self.db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

		Ok(())
	}
}

#[async_trait]
impl StoreDirectory for SettingsAdapterSqlite {
	async fn store_exists(&self, store_id: StoreId) -> CcResult<bool> {
		let row = sqlx::query("SELECT 1 FROM stores WHERE store_id = ?")
			.bind(store_id.0)
			.fetch_optional(&self.db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;
		Ok(row.is_some())
	}

	async fn list_stores(&self) -> CcResult<Vec<Store>> {
		let rows = sqlx::query("SELECT store_id, name FROM stores ORDER BY store_id")
			.fetch_all(&self.db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		let mut stores = Vec::with_capacity(rows.len());
		for row in rows {
			let store_id: u32 = row.try_get("store_id").map_err(|_| Error::DbError)?;
			let name: String = row.try_get("name").map_err(|_| Error::DbError)?;
			stores.push(Store { store_id: StoreId(store_id), name: name.into() });
		}

		Ok(stores)
	}
}

// vim: ts=4
