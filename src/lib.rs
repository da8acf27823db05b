//! Gutcheck library
//!
//! Core record stores, services, and reporting for the gut-health
//! tracker, exposed for the binaries and for integration tests.

pub mod app;
pub mod config;
pub mod error;
pub mod reporting;
pub mod server;
pub mod services;
pub mod store;
