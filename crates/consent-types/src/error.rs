//! Error taxonomy shared across the service and its adapters.

use axum::{Json, http::StatusCode, response::IntoResponse};
use std::collections::BTreeMap;

pub type CcResult<T> = std::result::Result<T, Error>;

/// Per-field validation failures, keyed by field path (e.g. `texts.close`).
///
/// Ordered so error responses enumerate fields deterministically.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	DbError,
	/// One or more fields failed schema rules; carries field -> reason
	InvalidFields(FieldErrors),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::DbError => write!(f, "database error"),
			Error::InvalidFields(fields) => {
				write!(f, "validation failed for {} field(s)", fields.len())
			}
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let (status, code) = match &self {
			Error::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
			Error::PermissionDenied => (StatusCode::FORBIDDEN, "PERMISSION_DENIED"),
			Error::InvalidFields(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION"),
			_ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
		};
		let body = match self {
			Error::InvalidFields(fields) => serde_json::json!({
				"error": { "code": code, "message": "validation failed", "fields": fields }
			}),
			err => serde_json::json!({
				"error": { "code": code, "message": err.to_string() }
			}),
		};
		(status, Json(body)).into_response()
	}
}


// vim: ts=4
