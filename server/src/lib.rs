//! Cookie-consent banner settings service for a multi-tenant storefront
//! platform.
//!
//! Administrators configure the banner per store: position, layout, theme,
//! colors, text bundle, consent categories, and consent-gated scripts.
//! Persistence and store resolution are delegated to the adapter traits in
//! `consent-types`.

pub mod app;
pub mod extract;
mod prelude;
pub mod routes;
pub mod settings;

pub use app::{Adapters, App, AppOpts, AppState, run};

// vim: ts=4
