/// Typed environment variable helpers
pub mod config;
/// Logger initialization for binaries and tests
pub mod logger;
