//! Settings management handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::extract::{Auth, OptionalRequestId};
use crate::prelude::*;

use consent_types::store_directory::Store;

use super::types::{ConsentSettings, SettingsOptions, option_lists};

/// Response for the settings screen: current document plus the static
/// option lists the select inputs render from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
	pub enabled: bool,
	pub settings: ConsentSettings,
	pub options: SettingsOptions,
}

/// GET /api/store/{store_id}/cookie-consent - Current settings for a store
/// Falls back to the canonical defaults when the store has no stored
/// document; the response is always fully populated.
pub async fn get_settings(
	State(app): State<App>,
	Auth(_auth): Auth,
	Path(store_id): Path<StoreId>,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CcResult<(StatusCode, Json<ApiResponse<SettingsResponse>>)> {
	let stored = app.settings.load(store_id).await?;

	let response = ApiResponse::new(SettingsResponse {
		enabled: stored.enabled,
		settings: stored.settings,
		options: option_lists(),
	})
	.with_req_id(req_id.unwrap_or_default());

	Ok((StatusCode::OK, Json(response)))
}

/// PUT /api/store/{store_id}/cookie-consent - Validate and persist settings
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
	/// Module-level toggle, distinct from `settings.enabled`
	#[serde(default)]
	pub is_enabled: bool,
	/// The raw settings document as submitted by the admin form
	pub settings: serde_json::Value,
}

pub async fn put_settings(
	State(app): State<App>,
	Auth(auth): Auth,
	Path(store_id): Path<StoreId>,
	OptionalRequestId(req_id): OptionalRequestId,
	Json(req): Json<UpdateSettingsRequest>,
) -> CcResult<(StatusCode, Json<ApiResponse<SettingsResponse>>)> {
	let stored = app.settings.store(store_id, &req.settings, req.is_enabled).await?;

	info!("User {} updated cookie-consent settings for store {}", auth.login, store_id);

	let response = ApiResponse::new(SettingsResponse {
		enabled: stored.enabled,
		settings: stored.settings,
		options: option_lists(),
	})
	.with_req_id(req_id.unwrap_or_default());

	Ok((StatusCode::OK, Json(response)))
}

/// GET /api/store - List all stores for the admin UI's store switcher
pub async fn list_stores(
	State(app): State<App>,
	Auth(_auth): Auth,
	OptionalRequestId(req_id): OptionalRequestId,
) -> CcResult<(StatusCode, Json<ApiResponse<Vec<Store>>>)> {
	let stores = app.store_directory.list_stores().await?;

	let total = stores.len();
	let response = ApiResponse::with_pagination(stores, 0, 100, total)
		.with_req_id(req_id.unwrap_or_default());

	Ok((StatusCode::OK, Json(response)))
}

// vim: ts=4
