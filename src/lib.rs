// src/lib.rs
// DOCUMENTATION: Library root
// PURPOSE: Client-side sync layer for places and bookings against a remote JSON document store

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::{SyncError, SyncResult};
pub use services::SyncContext;
