//! App state type and server bootstrap

use std::sync::Arc;

use crate::extract::AuthCtx;
use crate::prelude::*;
use crate::routes;
use crate::settings::service::SettingsService;

use consent_types::settings_adapter::SettingsAdapter;
use consent_types::store_directory::StoreDirectory;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppOpts,

	pub settings_adapter: Arc<dyn SettingsAdapter>,
	pub store_directory: Arc<dyn StoreDirectory>,

	// Settings subsystem
	pub settings: SettingsService,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub settings_adapter: Arc<dyn SettingsAdapter>,
	pub store_directory: Arc<dyn StoreDirectory>,
}

#[derive(Debug)]
pub struct AppOpts {
	pub listen: Box<str>,
	/// Static identity injected into every request. Only for local
	/// development; in production an auth middleware in front of the
	/// service supplies the identity.
	pub local_auth: Option<AuthCtx>,
}

pub fn build_state(opts: AppOpts, adapters: Adapters) -> App {
	let settings = SettingsService::new(
		adapters.settings_adapter.clone(),
		adapters.store_directory.clone(),
	);
	Arc::new(AppState {
		opts,
		settings_adapter: adapters.settings_adapter,
		store_directory: adapters.store_directory,
		settings,
	})
}

/// Builds the app state and serves the admin API until the listener fails
pub async fn run(opts: AppOpts, adapters: Adapters) -> CcResult<()> {
	let app = build_state(opts, adapters);
	let router = routes::init(app.clone());

	let listener = tokio::net::TcpListener::bind(&*app.opts.listen).await?;
	info!("consent-server {} listening on {}", VERSION, app.opts.listen);
	axum::serve(listener, router).await?;

	Ok(())
}

// vim: ts=4
