//! Formatting utilities for terminal output

use crate::core::{CandidateSet, Slot};
use indicatif::ProgressStyle;

/// Format one slot as `L2: [1] AZK [2]*AZB` with selected items starred
#[must_use]
pub fn format_slot_line(slot: Slot, candidates: &CandidateSet, selected: &[String]) -> String {
    if candidates.is_empty() {
        return format!("{slot}: -");
    }

    let items: Vec<String> = candidates
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mark = if selected.iter().any(|s| s == item) {
                '*'
            } else {
                ' '
            };
            format!("[{}]{mark}{item}", i + 1)
        })
        .collect();

    format!("{slot}: {}", items.join(" "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar style for simulation runs
#[must_use]
pub fn simulation_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"))
}
