//! Logging utilities.
//!
//! This module centralizes logger initialization. The rest of the crate
//! only uses the standard `log` facade; every staged setup function logs
//! a human-readable message on failure and a short info line on success.

mod init;

pub use init::{LoggingConfig, init_logging};
