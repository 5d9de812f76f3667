//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade; the backend
//! is `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
