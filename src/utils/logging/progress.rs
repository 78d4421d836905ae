//! Progress bar for the score display
//!
//! The score is shown on a 100-step bar that starts at the previous score
//! and moves to the new one, using the indicatif crate.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::models::Percentage;

/// Default style for the score bar
pub const DEFAULT_SCORE_TEMPLATE: &str = "[{bar:50.red/white}] {pos:>3}% {msg}";

/// Delay between single steps when the bar moves
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(8);

/// Create the score bar drawing to stderr
///
/// # Arguments
/// * `start` - Initial position (previous score, 0 before the first cycle)
#[must_use]
pub fn create_score_bar(start: u8) -> ProgressBar {
    create_score_bar_with_target(start, ProgressDrawTarget::stderr())
}

/// Create the score bar with an explicit draw target
#[must_use]
pub fn create_score_bar_with_target(start: u8, target: ProgressDrawTarget) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(u64::from(Percentage::MAX)), target);
    let style = ProgressStyle::default_bar()
        .template(DEFAULT_SCORE_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_position(u64::from(start));
    pb
}

/// Move the bar one step at a time to the score and stop it there
///
/// # Arguments
/// * `pb` - The score bar
/// * `score` - Final position
/// * `step_delay` - Pause between steps; zero jumps straight to the score
pub fn show_score(pb: &ProgressBar, score: Percentage, step_delay: Duration) {
    let target = u64::from(score.value());

    if !step_delay.is_zero() {
        while pb.position() != target {
            let next = if pb.position() < target {
                pb.position() + 1
            } else {
                pb.position() - 1
            };
            pb.set_position(next);
            std::thread::sleep(step_delay);
        }
    }

    pb.set_position(target);
    // finish_* would jump to the full length
    pb.abandon_with_message("risk");
}
