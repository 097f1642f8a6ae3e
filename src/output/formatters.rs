//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterHints, LetterState};
use colored::{ColoredString, Colorize};

/// QWERTY rows for keyboard hint rendering
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Color one letter according to its feedback state
#[must_use]
pub fn colorize_letter(letter: char, state: LetterState) -> ColoredString {
    let upper = letter.to_ascii_uppercase().to_string();
    match state {
        LetterState::Correct => upper.black().on_bright_green().bold(),
        LetterState::Present => upper.black().on_bright_yellow().bold(),
        LetterState::Absent => upper.white().on_bright_black(),
    }
}

/// Render one guess as a colored tile row
#[must_use]
pub fn tile_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.states())
        .map(|(letter, &state)| format!(" {} ", colorize_letter(letter, state)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render an empty tile row (unused board slots)
#[must_use]
pub fn empty_row() -> String {
    std::iter::repeat_n(format!(" {} ", "·".dimmed()), 5)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a keyboard row with best-known letter states
#[must_use]
pub fn keyboard_row(row: &str, hints: &LetterHints) -> String {
    row.chars()
        .map(|letter| match hints.get(letter as u8) {
            Some(state) => colorize_letter(letter, state).to_string(),
            None => letter.to_ascii_uppercase().to_string().dimmed().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
