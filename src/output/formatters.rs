//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile: green, yellow or gray background
#[must_use]
pub fn letter_tile(letter: char, feedback: LetterFeedback) -> ColoredString {
    let tile = format!(" {letter} ").black().bold();
    match feedback {
        LetterFeedback::Correct => tile.on_green(),
        LetterFeedback::Present => tile.on_yellow(),
        LetterFeedback::Absent => tile.white().on_bright_black(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.letters())
        .map(|(letter, &kind)| letter_tile(letter, kind).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_row_keeps_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let row = guess_row(&guess, &Feedback::PERFECT);
        assert_eq!(row, " C  R  A  N  E ");
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
