//! Feature-specific logging macros and utilities
//!
//! Each feature logs under its own target so levels can be tuned per component
//! through `LogConfig::features`.

/// Feature categories for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFeature {
    Mapper,
    HttpServer,
    Config,
}

impl LogFeature {
    pub const ALL: [LogFeature; 3] = [LogFeature::Mapper, LogFeature::HttpServer, LogFeature::Config];

    /// Get the target string for this feature
    pub fn target(&self) -> &'static str {
        match self {
            LogFeature::Mapper => "cgcore_iso::mapper",
            LogFeature::HttpServer => "cgcore_iso::http_server",
            LogFeature::Config => "cgcore_iso::config",
        }
    }

    /// Name used as the key in `LogConfig::features`
    pub fn name(&self) -> &'static str {
        match self {
            LogFeature::Mapper => "mapper",
            LogFeature::HttpServer => "http_server",
            LogFeature::Config => "config",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|feature| feature.name() == name)
    }
}

// Mapper-specific logging macros
#[macro_export]
macro_rules! log_mapper_debug {
    ($($arg:tt)*) => {
        log::debug!(target: "cgcore_iso::mapper", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_mapper_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "cgcore_iso::mapper", $($arg)*)
    };
}

// HTTP Server-specific logging macros
#[macro_export]
macro_rules! log_http_info {
    ($($arg:tt)*) => {
        log::info!(target: "cgcore_iso::http_server", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_http_warn {
    ($($arg:tt)*) => {
        log::warn!(target: "cgcore_iso::http_server", $($arg)*)
    };
}

// Config-specific logging macros
#[macro_export]
macro_rules! log_config_info {
    ($($arg:tt)*) => {
        log::info!(target: "cgcore_iso::config", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_config_error {
    ($($arg:tt)*) => {
        log::error!(target: "cgcore_iso::config", $($arg)*)
    };
}
