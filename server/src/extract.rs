//! Custom extractors for request-scoped data
//!
//! Authentication itself is an external middleware concern: the middleware
//! in front of this service authenticates the administrator and inserts an
//! `Auth` value into the request extensions. The extractors here only read
//! what that middleware supplied.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::prelude::*;

/// Identity of the authenticated administrator
#[derive(Debug, Clone)]
pub struct AuthCtx {
	pub user_id: u32,
	pub login: String,
	pub roles: Vec<String>,
}

// Auth //
//******//
#[derive(Debug, Clone)]
pub struct Auth(pub AuthCtx);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		if let Some(auth) = parts.extensions.get::<Auth>().cloned() {
			Ok(auth)
		} else {
			Err(Error::PermissionDenied)
		}
	}
}

// RequestId //
//***********//
/// Request ID for tracing and debugging
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Optional Request ID extractor - always succeeds, returns None if not available
#[derive(Clone, Debug)]
pub struct OptionalRequestId(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalRequestId
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		let req_id = parts.extensions.get::<RequestId>().map(|r| r.0.clone());
		Ok(OptionalRequestId(req_id))
	}
}

// vim: ts=4
