//! Logging utilities.
//!
//! The engine itself only emits through the `log` facade. This module is the
//! one place that installs a backend (`env_logger`), for binaries and demos.

mod init;

pub use init::{init_logging, FilterSource, LoggingConfig};
