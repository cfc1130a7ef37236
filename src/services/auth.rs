// src/services/auth.rs
// DOCUMENTATION: Current-user session
// PURPOSE: Supply the signed-in user id that new places and bookings are owned by

use crate::errors::{SyncError, SyncResult};
use tokio::sync::watch;

/// Signed-in user for the lifetime of the app session
/// DOCUMENTATION: Ownership is only recorded as a `userId` field on records;
/// nothing is sent as a credential.
pub struct AuthSession {
    user: watch::Sender<Option<String>>,
}

impl AuthSession {
    pub fn new(user_id: Option<String>) -> Self {
        let (user, _) = watch::channel(user_id);
        Self { user }
    }

    pub fn signed_out() -> Self {
        Self::new(None)
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        let user_id = user_id.into();
        log::info!("User signed in: {}", user_id);
        self.user.send_replace(Some(user_id));
    }

    pub fn sign_out(&self) {
        if self.user.send_replace(None).is_some() {
            log::info!("User signed out");
        }
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    /// Current user id, or `Unauthenticated`
    pub fn require_user_id(&self) -> SyncResult<String> {
        self.user_id().ok_or(SyncError::Unauthenticated)
    }

    /// Watch sign-in / sign-out changes
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.user.subscribe()
    }
}
