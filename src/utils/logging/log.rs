//! Logging utilities
//!
//! This module provides standardized logging functions for interaction cycles.

use std::time::Duration;

use crate::models::Percentage;

/// Log the start of an interaction cycle
///
/// # Arguments
/// * `cycle` - 1-based cycle number
/// * `source` - Where the answers come from
pub fn log_cycle_start(cycle: usize, source: &str) {
    log::info!("Starting evaluation {cycle} with answers from {source}");
}

/// Log a completed cycle with consistent format
///
/// # Arguments
/// * `cycle` - 1-based cycle number
/// * `features` - Number of features scored
/// * `score` - The resulting score
/// * `elapsed` - Optional elapsed time
pub fn log_cycle_complete(cycle: usize, features: usize, score: Percentage, elapsed: Option<Duration>) {
    if let Some(duration) = elapsed {
        log::info!("Evaluation {cycle} scored {score} from {features} features in {duration:?}");
    } else {
        log::info!("Evaluation {cycle} scored {score} from {features} features");
    }
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `key` - Optional field key related to the warning
pub fn log_warning(message: &str, key: Option<&str>) {
    if let Some(key) = key {
        log::warn!("{message}: {key}");
    } else {
        log::warn!("{message}");
    }
}
