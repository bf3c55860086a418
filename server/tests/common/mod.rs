//! Shared test utilities

pub mod adapters;
