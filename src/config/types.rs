// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub docs: DocsConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    /// Seconds a connection may stay open
    pub connection_timeout: u64,
    pub keep_alive: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    pub access_log: bool,
}

/// Documentation mount configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DocsConfig {
    pub url_prefix: String,
    /// Specification file read once at startup
    #[serde(default)]
    pub spec_file: Option<String>,
    /// Directory holding `swagger.yaml`
    #[serde(default)]
    pub spec_dir: Option<String>,
    /// Re-read `spec_dir` on every request instead of once
    #[serde(default)]
    pub reload_every_request: bool,
}
