//! Logging utilities for table loading
//!
//! This module provides helpers that keep loader log lines uniform.

pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_load_complete, log_load_failure, log_load_start, log_row_skipped};
