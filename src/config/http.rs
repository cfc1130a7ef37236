// src/config/http.rs
// DOCUMENTATION: HTTP client initialization
// PURPOSE: Build the single reqwest client shared by every remote call

use crate::config::Config;
use reqwest::Client;

/// Initialize the shared HTTP client
/// DOCUMENTATION: Called once during startup; the client pools connections
/// internally so every store clones the same handle.
/// No request timeout is configured: failures surface whenever the transport reports them.
pub fn init_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    log::info!(
        "Initializing HTTP client: store={}, upload={}",
        config.store_url,
        config.upload_url
    );

    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    log::info!("HTTP client initialized successfully");
    Ok(client)
}
