// src/services/context.rs
// DOCUMENTATION: Session-wide service wiring
// PURPOSE: Build the auth session and both stores once and hand them out by reference

use crate::config::{init_http_client, Config};
use crate::errors::SyncError;
use crate::services::{AuthSession, BookingStore, PlaceStore, RestDocumentStore};
use std::sync::Arc;

/// Everything a front-end needs for one app session
#[derive(Clone)]
pub struct SyncContext {
    pub auth: Arc<AuthSession>,
    pub places: Arc<PlaceStore>,
    pub bookings: Arc<BookingStore>,
}

impl SyncContext {
    /// Wire both stores to the same remote store and session
    pub fn new(remote: Arc<RestDocumentStore>, auth: Arc<AuthSession>) -> Self {
        Self {
            places: Arc::new(PlaceStore::new(remote.clone(), remote.clone(), auth.clone())),
            bookings: Arc::new(BookingStore::new(remote, auth.clone())),
            auth,
        }
    }

    /// Build the context from configuration
    pub fn from_config(config: &Config) -> Result<Self, SyncError> {
        let client = init_http_client(config)?;
        let remote = Arc::new(RestDocumentStore::from_config(client, config));
        let auth = Arc::new(AuthSession::new(config.user_id.clone()));
        Ok(Self::new(remote, auth))
    }
}
