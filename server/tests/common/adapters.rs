//! In-memory test adapter
//!
//! Implements both adapter traits over a plain HashMap so service-level
//! tests run without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use consent_types::error::CcResult;
use consent_types::settings_adapter::{ModuleSettings, SettingsAdapter};
use consent_types::store_directory::{Store, StoreDirectory};
use consent_types::types::StoreId;

#[derive(Debug, Default)]
pub struct MemoryAdapter {
	stores: Vec<Store>,
	records: Mutex<HashMap<(u32, String), ModuleSettings>>,
}

impl MemoryAdapter {
	pub fn with_stores(stores: &[(u32, &str)]) -> Self {
		Self {
			stores: stores
				.iter()
				.map(|(id, name)| Store { store_id: StoreId(*id), name: (*name).into() })
				.collect(),
			records: Mutex::new(HashMap::new()),
		}
	}

	/// Number of persisted records, for asserting that failed writes
	/// touched nothing
	pub fn record_count(&self) -> usize {
		self.records.lock().unwrap().len()
	}
}

#[async_trait]
impl SettingsAdapter for MemoryAdapter {
	async fn read_module_settings(
		&self,
		store_id: StoreId,
		module: &str,
	) -> CcResult<Option<ModuleSettings>> {
		let records = self.records.lock().unwrap();
		Ok(records.get(&(store_id.0, module.to_string())).cloned())
	}

	async fn write_module_settings(
		&self,
		store_id: StoreId,
		module: &str,
		settings: &ModuleSettings,
	) -> CcResult<()> {
		let mut records = self.records.lock().unwrap();
		records.insert((store_id.0, module.to_string()), settings.clone());
		Ok(())
	}
}

#[async_trait]
impl StoreDirectory for MemoryAdapter {
	async fn store_exists(&self, store_id: StoreId) -> CcResult<bool> {
		Ok(self.stores.iter().any(|s| s.store_id == store_id))
	}

	async fn list_stores(&self) -> CcResult<Vec<Store>> {
		Ok(self.stores.clone())
	}
}
