//! Formatting utilities for terminal output

use crate::core::{BLANK, LetterSet, Pattern};

/// Spread a pattern out for reading, `C-T` becomes `C _ T`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .as_bytes()
        .iter()
        .map(|&ch| char::from(if ch == BLANK { b'_' } else { ch }).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters without separators, `{A, C}` becomes `AC`
#[must_use]
pub fn letter_run(letters: LetterSet) -> String {
    letters.iter().map(char::from).collect()
}

/// Format a number with up to six significant digits and no trailing zeros
///
/// `4.0` prints as `4`, `10.0 / 3.0` as `3.33333`.
#[must_use]
pub fn format_general(value: f64) -> String {
    if !value.is_normal() {
        return format!("{value}");
    }

    let exponent = value.abs().log10().floor() as i32;
    let decimals = (5 - exponent).max(0) as usize;
    let fixed = format!("{value:.decimals$}");

    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
