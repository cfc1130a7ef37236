// src/errors.rs
// DOCUMENTATION: Error types for the sync layer
// PURPOSE: Single error enum surfaced by every store and transport operation

use thiserror::Error;

/// Sync-layer error types
/// DOCUMENTATION: Remote failures are passed through as-is (status + body),
/// local failures get their own variant. No variant is ever retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("No signed-in user")]
    Unauthenticated,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SyncError {
    /// HTTP status of the remote failure, if the error came from one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SyncError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Decode(err.to_string())
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_only_for_remote_status() {
        let err = SyncError::Status {
            status: 404,
            body: "null".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(SyncError::Unauthenticated.status_code(), None);
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err: SyncError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, SyncError::Decode(_)));
    }
}
