//! Runs in its own process so a foreign logger can be installed first.

use cgcore_iso::logging::{self, config::LogConfig, LoggingError, LoggingSystem};

#[test]
fn foreign_logger_is_not_recorded_as_ours() {
    env_logger::builder().is_test(true).init();

    assert!(matches!(
        LoggingSystem::init_with_config(LogConfig::default()),
        Err(LoggingError::SetLogger(_))
    ));
    assert!(!LoggingSystem::is_initialized());
    assert!(LoggingSystem::get_config().is_none());

    // The failure is reported again rather than mistaken for a repeated init.
    assert!(matches!(logging::init(), Err(LoggingError::SetLogger(_))));
}
