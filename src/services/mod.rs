// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod auth;
pub mod booking_service;
pub mod cache;
pub mod context;
pub mod document_store;
#[cfg(test)]
pub(crate) mod memory_store;
pub mod place_service;
pub mod rest_client;

pub use auth::*;
pub use booking_service::*;
pub use cache::*;
pub use context::*;
pub use document_store::*;
pub use place_service::*;
pub use rest_client::*;
