use axum::{Extension, Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::extract::Auth;
use crate::prelude::*;
use crate::settings;

pub fn init(state: App) -> Router {
	let router = Router::new()
		.route("/api/store", get(settings::handler::list_stores))
		.route(
			"/api/store/{store_id}/cookie-consent",
			get(settings::handler::get_settings).put(settings::handler::put_settings),
		)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive());

	// Local development identity; production deployments run behind an
	// authenticating reverse proxy that inserts Auth itself.
	let router = if let Some(auth) = state.opts.local_auth.clone() {
		router.layer(Extension(Auth(auth)))
	} else {
		router
	};

	router.with_state(state)
}

// vim: ts=4
