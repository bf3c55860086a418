//! Shared types and adapter traits for the consent-rs settings service.
//!
//! This crate contains the foundational types shared between the server
//! crate and the adapter implementations. Extracting these into a separate
//! crate lets adapter crates compile independently of the server's feature
//! modules.

pub mod error;
pub mod prelude;
pub mod settings_adapter;
pub mod store_directory;
pub mod types;

// vim: ts=4
