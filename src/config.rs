//! Configuration for Strata
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Main configuration for a Strata instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for collection snapshots.
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── users.json
    ///     └── todos.json
    pub data_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Origin Configuration
    // -------------------------------------------------------------------------
    /// Base URL of the remote origin service (no trailing slash needed)
    pub origin_base_url: String,

    /// Timeout applied to every origin request
    pub origin_timeout: Duration,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./strata_data"),
            origin_base_url: "https://jsonplaceholder.typicode.com".to_string(),
            origin_timeout: Duration::from_secs(10),
            listen_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all snapshots)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the origin base URL
    pub fn origin_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.origin_base_url = url.into();
        self
    }

    /// Set the origin request timeout
    pub fn origin_timeout(mut self, timeout: Duration) -> Self {
        self.config.origin_timeout = timeout;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
