//! Cookie-consent settings subsystem
//!
//! Schema types with the canonical default document, the declarative
//! validator, the load/store service over the adapter traits, and the
//! admin API handlers.

pub mod handler;
pub mod service;
pub mod types;
pub mod validate;

pub use types::{
	BannerLayout, BannerPosition, BannerTexts, BannerTheme, CategorySettings, ConsentCategories,
	ConsentScripts, ConsentSettings, MODULE_SLUG, SettingsOptions,
};

// vim: ts=4
