#![allow(clippy::unwrap_used)]

use std::{env, path, sync::Arc};

use consent_server::extract::AuthCtx;
use consent_server::{Adapters, AppOpts};
use consent_settings_adapter_sqlite::SettingsAdapterSqlite;
use consent_types::types::StoreId;

pub struct Config {
	pub db_dir: path::PathBuf,
	pub listen: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let config = Config {
		db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:3000".to_string()),
	};
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	std::fs::create_dir_all(&config.db_dir).unwrap();
	let adapter =
		Arc::new(SettingsAdapterSqlite::new(config.db_dir.join("settings.db")).await.unwrap());

	// Seed a store so there is something to configure out of the box
	adapter.create_store(StoreId(1), "Default store").await.unwrap();

	consent_server::run(
		AppOpts {
			listen: config.listen.into(),
			// Local admin identity; put an authenticating proxy in front
			// for anything beyond local development.
			local_auth: Some(AuthCtx {
				user_id: 1,
				login: "admin".into(),
				roles: vec!["ADM".into()],
			}),
		},
		Adapters { settings_adapter: adapter.clone(), store_directory: adapter },
	)
	.await
	.unwrap();
}

// vim: ts=4
