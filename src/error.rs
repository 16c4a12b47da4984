use crate::config::ConfigError;
use std::fmt;
use std::io;

/// Unified error type for the mapper and the layers around it.
///
/// The mapping operations themselves never fail on well-typed input; the only
/// error they can surface is a boundary payload that does not have the shape
/// the requested direction expects.
#[derive(Debug)]
pub enum MapperError {
    /// The caller supplied a payload that is not a record/tree of the expected shape
    BoundaryParse(String),

    /// Errors related to configuration
    Config(String),

    /// Errors related to IO operations
    Io(io::Error),

    /// Errors related to serialization/deserialization
    Serialization(String),

    /// Errors raised while binding or running the HTTP server
    Server(String),
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundaryParse(msg) => write!(f, "Invalid metadata payload: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            Self::Server(msg) => write!(f, "Server error: {}", msg),
        }
    }
}

impl std::error::Error for MapperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapperError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Conversion from io::Error to MapperError
impl From<io::Error> for MapperError {
    fn from(error: io::Error) -> Self {
        MapperError::Io(error)
    }
}

/// Conversion from serde_json::Error to MapperError
impl From<serde_json::Error> for MapperError {
    fn from(error: serde_json::Error) -> Self {
        MapperError::Serialization(error.to_string())
    }
}

impl From<ConfigError> for MapperError {
    fn from(error: ConfigError) -> Self {
        MapperError::Config(error.to_string())
    }
}

/// Result type alias for mapper operations
pub type MapperResult<T> = Result<T, MapperError>;
