//! Progress bar utilities using indicatif for terminal output
//!
//! Bars draw on stderr, alongside the logs, so stdout carries only the
//! command result.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Style template for the per-issue export bar
const PROGRESS_TEMPLATE: &str =
    "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg} (ETA: {eta})";

const PROGRESS_CHARS: &str = "█▓▒░ ";

/// Per-issue progress bar for the export command.
///
/// `total` may be 0 and set later with `set_length` once known.
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style.progress_chars(PROGRESS_CHARS));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
