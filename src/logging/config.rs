//! Configuration management for the logging system
//!
//! Settings come from a TOML file or the service configuration, with
//! environment variable overrides applied on top.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::features::LogFeature;

/// Main logging configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// General logging settings
    pub general: GeneralConfig,
    /// Feature-specific log levels, keyed by feature name (`mapper`, `http_server`, `config`)
    pub features: HashMap<String, String>,
}

/// General logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default log level for all modules
    pub default_level: String,
    /// Enable colored output
    pub enable_colors: bool,
    /// Include timestamps
    pub include_timestamp: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_level: "INFO".to_string(),
            enable_colors: true,
            include_timestamp: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            features: Self::default_features(),
        }
    }
}

impl LogConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;

        let mut config: LogConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("CGCORE_ISO_LOG_LEVEL") {
            self.general.default_level = level;
        }
        if let Ok(colors) = std::env::var("CGCORE_ISO_LOG_COLORS") {
            self.general.enable_colors = colors.parse().unwrap_or(true);
        }

        for (key, value) in std::env::vars() {
            if let Some(feature) = key.strip_prefix("CGCORE_ISO_LOG_FEATURE_") {
                self.features.insert(feature.to_lowercase(), value);
            }
        }
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }

        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }

    /// Check that every level names a known log level and every feature is known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_level(&self.general.default_level).ok_or_else(|| ConfigError::Validation {
            field: "general.default_level".to_string(),
            message: format!("Unknown log level: {}", self.general.default_level),
        })?;

        for (feature, level) in &self.features {
            if LogFeature::from_name(feature).is_none() {
                return Err(ConfigError::Validation {
                    field: format!("features.{}", feature),
                    message: format!("Unknown logging feature: {}", feature),
                });
            }
            parse_level(level).ok_or_else(|| ConfigError::Validation {
                field: format!("features.{}", feature),
                message: format!("Unknown log level: {}", level),
            })?;
        }
        Ok(())
    }

    /// Get default feature-specific log levels
    fn default_features() -> HashMap<String, String> {
        let mut features = HashMap::new();
        features.insert("mapper".to_string(), "INFO".to_string());
        features.insert("http_server".to_string(), "INFO".to_string());
        features.insert("config".to_string(), "INFO".to_string());
        features
    }
}

/// Parse `TRACE|DEBUG|INFO|WARN|ERROR|OFF`, case-insensitively.
pub fn parse_level(level: &str) -> Option<log::LevelFilter> {
    level.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_is_valid() {
        let config = LogConfig::default();
        assert_eq!(config.general.default_level, "INFO");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_level_is_case_insensitive() {
        assert_eq!(parse_level("debug"), Some(log::LevelFilter::Debug));
        assert_eq!(parse_level("WARN"), Some(log::LevelFilter::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn unknown_feature_fails_validation() {
        let mut config = LogConfig::default();
        config
            .features
            .insert("transform".to_string(), "DEBUG".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging/logging.toml");

        let mut config = LogConfig::default();
        config.general.default_level = "DEBUG".to_string();
        config.general.include_timestamp = false;
        config.save_to_file(&path).unwrap();

        let loaded = LogConfig::from_file(&path).unwrap();
        assert!(!loaded.general.include_timestamp);
        assert_eq!(loaded.features.get("mapper").map(String::as_str), Some("INFO"));
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.toml");
        std::fs::write(&path, "[general]\nenable_colors = false\n").unwrap();

        let loaded = LogConfig::from_file(&path).unwrap();
        assert!(!loaded.general.enable_colors);
        assert!(loaded.general.include_timestamp);
    }
}
