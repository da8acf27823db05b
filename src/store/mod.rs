//! Store module
//!
//! Persistence layer for the three record collections:
//! - Model definitions for daily, weekly, and paper records
//! - The flat-file JSON record store they are owned by

pub mod models;
pub mod record_store;

pub use models::*;
pub use record_store::RecordStore;
