// Configuration module entry point
// Loads the server configuration from file and environment

mod types;

use elements_docs::ReloadPolicy;
use std::net::SocketAddr;
use std::path::PathBuf;

pub use types::{Config, DocsConfig, LoggingConfig};

/// Where the documented specification comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    None,
    File(PathBuf),
    Dir(PathBuf, ReloadPolicy),
}

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("ELEMENTS").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.connection_timeout", 30)?
            .set_default("server.keep_alive", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("docs.url_prefix", "/docs")?
            .set_default("docs.reload_every_request", false)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

impl DocsConfig {
    /// Resolve the configured specification source
    ///
    /// `spec_file` and `spec_dir` are mutually exclusive.
    pub fn spec_source(&self) -> Result<SpecSource, String> {
        match (&self.spec_file, &self.spec_dir) {
            (Some(_), Some(_)) => {
                Err("docs.spec_file and docs.spec_dir are mutually exclusive".to_string())
            }
            (Some(file), None) => Ok(SpecSource::File(PathBuf::from(file))),
            (None, Some(dir)) => {
                let policy = if self.reload_every_request {
                    ReloadPolicy::EveryRequest
                } else {
                    ReloadPolicy::Once
                };
                Ok(SpecSource::Dir(PathBuf::from(dir), policy))
            }
            (None, None) => Ok(SpecSource::None),
        }
    }
}
