//! Store directory trait
//!
//! Resolves store identifiers against the platform's store registry. Used
//! by the validator's store-reference check and by the admin UI's store
//! switcher.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

use crate::error::CcResult;
use crate::types::StoreId;

/// A single storefront within the multi-tenant platform
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
	pub store_id: StoreId,
	pub name: Box<str>,
}

#[async_trait]
pub trait StoreDirectory: Debug + Send + Sync {
	/// Checks whether the given store identifier references an existing store
	async fn store_exists(&self, store_id: StoreId) -> CcResult<bool>;

	/// Lists all stores the administrator can configure
	async fn list_stores(&self) -> CcResult<Vec<Store>>;
}

// vim: ts=4
