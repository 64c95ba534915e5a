//! Logger module
//!
//! Server lifecycle and access logging on top of `tracing`.

use crate::config::{Config, LoggingConfig};
use hyper::{Method, StatusCode, Uri, Version};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    tracing::info!("Documentation server listening on: http://{addr}");
    tracing::info!("Viewer mounted at: http://{addr}{}", config.docs.url_prefix);
    tracing::info!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    if let Some(ref path) = config.docs.spec_file {
        tracing::info!("Specification file: {path}");
    }
    if let Some(ref path) = config.docs.spec_dir {
        tracing::info!(
            "Specification directory: {path} (reload every request: {})",
            config.docs.reload_every_request
        );
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    tracing::info!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(status: StatusCode, size: u64) {
    tracing::info!("[Response] Sent {status} ({size} bytes)");
}

pub fn log_spec_reloaded() {
    tracing::info!("[Reload] Specification reloaded");
}

pub fn log_error(message: &str) {
    tracing::error!("{message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("{message}");
}

pub fn log_shutdown(active_connections: usize) {
    tracing::info!("Shutting down, {active_connections} connection(s) still active");
}
