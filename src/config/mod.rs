//! Configuration for the mapper service
//!
//! The HTTP server and CLI read a JSON service configuration; the logging
//! section can also live in its own TOML file (see [`LogConfig::from_file`]).

pub mod error;

pub use error::{ConfigError, ConfigResult};

use crate::logging::config::LogConfig;
use crate::{log_config_error, log_config_info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "CGCORE_ISO_CONFIG";

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/mapper_config.json";

/// Configuration for a mapper service instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MapperConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LogConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    9001
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl HttpConfig {
    /// Address in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MapperConfig {
    /// Set the HTTP port
    pub fn with_port(mut self, port: u16) -> Self {
        self.http.port = port;
        self
    }

    /// Read a configuration file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or is not valid
    /// configuration JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check ranges the type system does not enforce
    pub fn validate(&self) -> ConfigResult<()> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation {
                field: "http.port".to_string(),
                message: "Port must be greater than 0".to_string(),
            });
        }
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "http.host".to_string(),
                message: "Host must not be empty".to_string(),
            });
        }
        self.logging.validate()
    }
}

/// Load the service configuration.
///
/// The file is taken from `path`, else the `CGCORE_ISO_CONFIG` environment
/// variable, else `config/mapper_config.json`. A missing file yields the
/// defaults. `port`, when given, replaces the configured port.
///
/// # Errors
///
/// Returns a `ConfigError` if the file exists but cannot be parsed, or if the
/// resulting configuration fails validation.
pub fn load_mapper_config(path: Option<&str>, port: Option<u16>) -> ConfigResult<MapperConfig> {
    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if Path::new(&config_path).exists() {
        match MapperConfig::from_file(&config_path) {
            Ok(cfg) => {
                log_config_info!("Loaded configuration from {}", config_path);
                cfg
            }
            Err(e) => {
                log_config_error!("Failed to parse configuration {}: {}", config_path, e);
                return Err(e);
            }
        }
    } else {
        log_config_info!(
            "No configuration at {}, using defaults",
            config_path
        );
        MapperConfig::default()
    };

    if let Some(p) = port {
        config = config.with_port(p);
    }
    config.logging.apply_env_overrides();
    config.validate()?;
    Ok(config)
}
