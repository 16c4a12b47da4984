//! Configuration error types

/// Errors raised while loading, saving or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO-related errors (file access, permissions, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configuration could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// A field holds a value outside its allowed range
    #[error("Invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
