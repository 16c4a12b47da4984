//! # Logging System
//!
//! Installs an `env_logger` backend behind the `log` facade, driven by
//! [`LogConfig`]: a default level plus per-feature overrides. `RUST_LOG`, when
//! set, is applied last and wins.

pub mod config;
pub mod features;

use config::{parse_level, LogConfig};
use features::LogFeature;
use once_cell::sync::OnceCell;

/// Configuration the logger was installed with
static LOGGING_CONFIG: OnceCell<LogConfig> = OnceCell::new();

pub struct LoggingSystem;

impl LoggingSystem {
    /// Initialize the logging system with default configuration
    pub fn init_default() -> Result<(), LoggingError> {
        let mut config = LogConfig::default();
        config.apply_env_overrides();
        Self::init_with_config(config)
    }

    /// Initialize the logging system with a custom configuration
    pub fn init_with_config(config: LogConfig) -> Result<(), LoggingError> {
        if Self::is_initialized() {
            return Err(LoggingError::AlreadyInitialized);
        }
        config
            .validate()
            .map_err(|e| LoggingError::Config(e.to_string()))?;

        let default_level = parse_level(&config.general.default_level).ok_or_else(|| {
            LoggingError::Config(format!(
                "Invalid log level: {}",
                config.general.default_level
            ))
        })?;

        let mut builder = env_logger::Builder::new();
        builder.filter_level(default_level);
        for (name, level) in &config.features {
            let (Some(feature), Some(filter)) = (LogFeature::from_name(name), parse_level(level))
            else {
                continue;
            };
            builder.filter_module(feature.target(), filter);
        }
        builder.write_style(if config.general.enable_colors {
            env_logger::WriteStyle::Auto
        } else {
            env_logger::WriteStyle::Never
        });
        if !config.general.include_timestamp {
            builder.format_timestamp(None);
        }
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        // Record the config only once our logger is actually installed.
        builder.try_init()?;
        LOGGING_CONFIG
            .set(config)
            .map_err(|_| LoggingError::AlreadyInitialized)?;

        Ok(())
    }

    /// Get the configuration the logger was installed with
    pub fn get_config() -> Option<LogConfig> {
        LOGGING_CONFIG.get().cloned()
    }

    pub fn is_initialized() -> bool {
        LOGGING_CONFIG.get().is_some()
    }
}

/// Logging system errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Logging system already initialized")]
    AlreadyInitialized,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to install logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// Initialize logging with defaults, ignoring a repeated call.
pub fn init() -> Result<(), LoggingError> {
    match LoggingSystem::init_default() {
        Err(LoggingError::AlreadyInitialized) => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected_before_install() {
        let mut config = LogConfig::default();
        config.general.default_level = "LOUD".to_string();
        assert!(matches!(
            LoggingSystem::init_with_config(config),
            Err(LoggingError::Config(_))
        ));
    }

    #[test]
    fn repeated_init_is_tolerated() {
        let _ = init();
        assert!(init().is_ok());
        assert!(LoggingSystem::is_initialized());
        assert!(LoggingSystem::get_config().is_some());
        assert!(matches!(
            LoggingSystem::init_with_config(LogConfig::default()),
            Err(LoggingError::AlreadyInitialized)
        ));
    }
}
