//! Formatting utilities used for CLI outputs.

use crate::models::phase::Phase;
use crate::utils::colors::{GREEN, GREY, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Shorten long paths for one-line display: `.../<last 25 chars of dir>/<file>`.
pub fn shorten_path(path: &str) -> String {
    const MAX: usize = 50;
    const KEEP: usize = 25;

    if path.chars().count() <= MAX {
        return path.to_string();
    }

    let p = std::path::Path::new(path);
    let tail = p
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let head = p
        .parent()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let skip = head.chars().count().saturating_sub(KEEP);
    let head_tail: String = head.chars().skip(skip).collect();

    format!(".../{}/{}", head_tail, tail)
}

/// Label and ANSI color for a timer phase.
pub fn describe_phase(phase: Phase) -> (String, &'static str) {
    match phase {
        Phase::Idle => ("Idle".into(), GREY),
        Phase::Running => ("Running".into(), GREEN),
        Phase::Paused => ("Paused".into(), YELLOW),
    }
}
