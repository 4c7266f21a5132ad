//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Feedback, Pattern, Word};

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: Pattern) -> String {
    pattern
        .iter()
        .map(|feedback| match feedback {
            Feedback::Miss => '⬜',
            Feedback::Present => '🟨',
            Feedback::Hit => '🟩',
        })
        .collect()
}

/// Render a guess with each letter tinted by its feedback
#[must_use]
pub fn colorize_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.iter())
        .map(|(ch, feedback)| tint(ch.to_ascii_uppercase(), feedback).to_string())
        .collect()
}

fn tint(letter: char, feedback: Feedback) -> ColoredString {
    let cell = format!(" {letter} ");
    match feedback {
        Feedback::Hit => cell.black().on_green().bold(),
        Feedback::Present => cell.black().on_yellow().bold(),
        Feedback::Miss => cell.white().on_bright_black(),
    }
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
