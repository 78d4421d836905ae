//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging, console output, and the score bar.

pub mod console;
pub mod log;
pub mod progress;

// Re-export commonly used functions for convenience
pub use log::{log_cycle_complete, log_cycle_start, log_warning};
pub use progress::{create_score_bar, show_score};
