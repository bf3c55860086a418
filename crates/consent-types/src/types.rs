//! Common types used throughout the consent-rs service.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// StoreId //
//*********//
/// Identifier of a single storefront within the multi-tenant platform
#[derive(Clone, Copy, Debug)]
pub struct StoreId(pub u32);

impl std::fmt::Display for StoreId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::cmp::PartialEq for StoreId {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl std::cmp::Eq for StoreId {}

impl std::hash::Hash for StoreId {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

impl Serialize for StoreId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_u32(self.0)
	}
}

impl<'de> Deserialize<'de> for StoreId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(StoreId(u32::deserialize(deserializer)?))
	}
}

// ApiResponse //
//*************//
/// Pagination metadata for list responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
	pub offset: usize,
	pub limit: usize,
	pub total: usize,
}

/// Standard response envelope for all API endpoints
#[skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
	pub data: T,
	pub req_id: Option<String>,
	pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { data, req_id: None, pagination: None }
	}

	pub fn with_pagination(data: T, offset: usize, limit: usize, total: usize) -> Self {
		Self { data, req_id: None, pagination: Some(Pagination { offset, limit, total }) }
	}

	pub fn with_req_id(mut self, req_id: String) -> Self {
		if !req_id.is_empty() {
			self.req_id = Some(req_id);
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn api_response_omits_empty_fields() {
		let resp = ApiResponse::new(1u32);
		let json = serde_json::to_value(&resp).unwrap();
		assert_eq!(json, serde_json::json!({ "data": 1 }));
	}

	#[test]
	fn api_response_carries_req_id_and_pagination() {
		let resp =
			ApiResponse::with_pagination(vec![1u32, 2], 0, 100, 2).with_req_id("req-1".into());
		let json = serde_json::to_value(&resp).unwrap();
		assert_eq!(json["reqId"], "req-1");
		assert_eq!(json["pagination"]["total"], 2);
	}

	#[test]
	fn store_id_serializes_as_number() {
		let json = serde_json::to_value(StoreId(42)).unwrap();
		assert_eq!(json, serde_json::json!(42));
	}
}

// vim: ts=4
