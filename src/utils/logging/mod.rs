//! Logging utilities for dataset loading

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_load_complete, log_load_start};
