//! Formatting utilities for terminal output

use crate::core::{BLANK, Pattern};
use indicatif::{ProgressBar, ProgressStyle};

/// Format a pattern as spaced capitals, e.g. `O N   T _ M E`
#[must_use]
pub fn format_pattern(pattern: &Pattern) -> String {
    pattern
        .as_bytes()
        .iter()
        .map(|&b| match b {
            BLANK => "_".to_string(),
            b if b.is_ascii_lowercase() => (b.to_ascii_uppercase() as char).to_string(),
            _ => " ".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for long parallel runs
#[must_use]
pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_keeps_word_gaps() {
        let pattern = Pattern::parse("on t_me").unwrap();
        assert_eq!(format_pattern(&pattern), "O N   T _ M E");
    }

    #[test]
    fn pattern_all_blank() {
        let pattern = Pattern::parse("___").unwrap();
        assert_eq!(format_pattern(&pattern), "_ _ _");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
