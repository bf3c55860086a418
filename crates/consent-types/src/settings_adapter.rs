//! Settings store gateway trait
//!
//! Persists one settings document per (store, module) pair as a structured
//! JSON blob alongside a module-level `enabled` flag.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::CcResult;
use crate::types::StoreId;

/// Persisted record for one feature module of one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSettings {
	/// Module-level toggle (the admin UI's `isEnabled` switch)
	pub enabled: bool,
	/// The settings document, stored as raw JSON
	pub settings: serde_json::Value,
}

#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// Reads the stored settings record for a store, if any exists.
	/// A store that was never written to returns `None`.
	async fn read_module_settings(
		&self,
		store_id: StoreId,
		module: &str,
	) -> CcResult<Option<ModuleSettings>>;

	/// Replaces the stored record wholesale (no field-level patching).
	/// Concurrent writers to the same store are last-writer-wins.
	async fn write_module_settings(
		&self,
		store_id: StoreId,
		module: &str,
		settings: &ModuleSettings,
	) -> CcResult<()>;
}

// vim: ts=4
