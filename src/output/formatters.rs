//! Formatting utilities for terminal output

use crate::core::MAX_GUESSES;

const GALLOWS_TOP: &str = "  +---+";

/// Format guessed letters as a comma separated list
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Draw the gallows for the number of attempts used
///
/// One body part per wrong guess: head, body, arms, legs.
#[must_use]
pub fn gallows(guesses_left: i32) -> String {
    let misses = (MAX_GUESSES - guesses_left).clamp(0, MAX_GUESSES);
    let part = |n: i32, c: char| if misses >= n { c } else { ' ' };

    let lines = [
        GALLOWS_TOP.to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ];

    lines.join("\n")
}

/// Create a bar showing attempts remaining
#[must_use]
pub fn attempts_bar(guesses_left: i32) -> String {
    let filled = guesses_left.clamp(0, MAX_GUESSES) as usize;
    let empty = MAX_GUESSES as usize - filled;

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
