//! Settings load/store pipeline over the adapter traits
//!
//! Reads merge the stored document over the canonical defaults so callers
//! always see a fully-populated document. Writes verify the store
//! reference, validate the raw submission, and replace the stored record
//! wholesale; any failure leaves the previous record authoritative.

use std::sync::Arc;

use crate::prelude::*;

use consent_types::settings_adapter::{ModuleSettings, SettingsAdapter};
use consent_types::store_directory::StoreDirectory;

use super::types::{ConsentSettings, MODULE_SLUG};
use super::validate::validate_settings;

/// A store's settings together with the module-level toggle
#[derive(Debug, Clone, PartialEq)]
pub struct StoredConsentSettings {
	pub enabled: bool,
	pub settings: ConsentSettings,
}

pub struct SettingsService {
	adapter: Arc<dyn SettingsAdapter>,
	directory: Arc<dyn StoreDirectory>,
}

impl SettingsService {
	pub fn new(adapter: Arc<dyn SettingsAdapter>, directory: Arc<dyn StoreDirectory>) -> Self {
		Self { adapter, directory }
	}

	/// Loads the settings for a store. A store that was never written to
	/// yields the canonical defaults with the module disabled; a store the
	/// directory does not know at all is an error.
	pub async fn load(&self, store_id: StoreId) -> CcResult<StoredConsentSettings> {
		if !self.directory.store_exists(store_id).await? {
			return Err(Error::NotFound);
		}

		match self.adapter.read_module_settings(store_id, MODULE_SLUG).await? {
			Some(stored) => Ok(StoredConsentSettings {
				enabled: stored.enabled,
				settings: ConsentSettings::merged_with_defaults(&stored.settings)?,
			}),
			None => {
				debug!("No stored settings for store {}, using defaults", store_id);
				Ok(StoredConsentSettings {
					enabled: false,
					settings: ConsentSettings::default(),
				})
			}
		}
	}

	/// Validates and persists a raw settings submission for a store,
	/// replacing the stored document wholesale.
	pub async fn store(
		&self,
		store_id: StoreId,
		raw: &serde_json::Value,
		enabled: bool,
	) -> CcResult<StoredConsentSettings> {
		if !self.directory.store_exists(store_id).await? {
			warn!("Settings write for unknown store {}", store_id);
			let mut fields = FieldErrors::new();
			fields.insert("storeId".into(), "store does not exist".into());
			return Err(Error::InvalidFields(fields));
		}

		let settings = validate_settings(raw).map_err(Error::InvalidFields)?;

		let document = serde_json::to_value(&settings)
			.map_err(|err| Error::Internal(format!("Failed to serialize settings: {}", err)))?;
		self.adapter
			.write_module_settings(
				store_id,
				MODULE_SLUG,
				&ModuleSettings { enabled, settings: document },
			)
			.await?;

		info!("Cookie-consent settings updated for store {}", store_id);
		Ok(StoredConsentSettings { enabled, settings })
	}
}

// vim: ts=4
