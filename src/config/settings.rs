//! Hub network configuration settings

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::HubResult;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "HUB_NETWORK_CONFIG";

/// Main service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub metrics: MetricsSettings,
}

/// Server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_workers() -> usize {
    num_cpus::get()
}

/// Database settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// RocksDB data directory
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Enable compression
    #[serde(default = "default_true")]
    pub compression: bool,
    /// Cache size in MB
    #[serde(default = "default_cache_size")]
    pub cache_size_mb: usize,
}

fn default_data_dir() -> String {
    "./data/hub_network".to_string()
}

fn default_cache_size() -> usize {
    64
}

fn default_true() -> bool {
    true
}

/// Metrics settings
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// Expose Prometheus metrics at `/metrics`
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Settings {
    /// Load settings from file and environment
    pub fn load() -> HubResult<Self> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config".to_string());
        Self::load_from(path)
    }

    /// Load settings from a specific config file path (without extension)
    pub fn load_from<P: AsRef<Path>>(path: P) -> HubResult<Self> {
        let config_path = path.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("server.workers", default_workers() as i64)?
            .set_default("server.cors_origins", Vec::<String>::new())?
            .set_default("database.data_dir", default_data_dir())?
            .set_default("database.compression", true)?
            .set_default("database.cache_size_mb", default_cache_size() as i64)?
            .set_default("metrics.enabled", true)?
            // Add config file if it exists
            .add_source(File::with_name(config_path.to_str().unwrap_or("config")).required(false))
            // Add environment variables with prefix HUB_NETWORK_
            .add_source(
                Environment::with_prefix("HUB_NETWORK")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            );

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Address the HTTP server binds to
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server: ServerSettings {
                host: default_host(),
                port: default_port(),
                workers: default_workers(),
                cors_origins: Vec::new(),
            },
            database: DatabaseSettings {
                data_dir: default_data_dir(),
                compression: true,
                cache_size_mb: default_cache_size(),
            },
            metrics: MetricsSettings { enabled: true },
        }
    }
}
