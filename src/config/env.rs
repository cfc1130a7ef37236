// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

pub const DEFAULT_STORE_URL: &str = "https://ionic-angular-course-f37f6.firebaseio.com";
pub const DEFAULT_UPLOAD_URL: &str =
    "https://us-central1-ionic-angular-course-f37f6.cloudfunctions.net/storeImage";

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote JSON document store (no trailing slash)
    pub store_url: String,

    /// Image upload endpoint (separate host from the store)
    pub upload_url: String,

    /// User id the session starts signed in as, if any
    pub user_id: Option<String>,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_url: DEFAULT_STORE_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            user_id: Some("abc".to_string()),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Config {
            store_url: lookup("STAYSYNC_STORE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.store_url),

            upload_url: lookup("STAYSYNC_UPLOAD_URL").unwrap_or(defaults.upload_url),

            // An explicitly empty value means "start signed out"
            user_id: match lookup("STAYSYNC_USER_ID") {
                Some(id) if id.trim().is_empty() => None,
                Some(id) => Some(id),
                None => defaults.user_id,
            },

            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the endpoints are usable before any request is made
    pub fn validate(&self) -> Result<(), String> {
        if !is_http_url(&self.store_url) {
            return Err(format!(
                "STAYSYNC_STORE_URL must be an http(s) URL, got '{}'",
                self.store_url
            ));
        }

        if !is_http_url(&self.upload_url) {
            return Err(format!(
                "STAYSYNC_UPLOAD_URL must be an http(s) URL, got '{}'",
                self.upload_url
            ));
        }

        if self.user_id.is_none() {
            log::warn!("STAYSYNC_USER_ID not configured - creating places and bookings will fail");
        }

        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}
