//! Display functions for the game loop and the inspect command

use super::formatters::{attempts_bar, format_letters, gallows};
use crate::core::{Game, Outcome};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

/// Print the welcome banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, "{}", "        Welcome to Hangman!".bright_yellow().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, "Guess one letter per turn. Type 'save' to save and quit.")
}

/// Print progress, attempts left and wrong letters for one turn
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_turn(out: &mut impl Write, game: &Game) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", gallows(game.guesses_left()).bright_black())?;
    writeln!(out, "\nWord: {}", game.display_progress().bright_white().bold())?;
    writeln!(
        out,
        "Guesses left: {} {}",
        game.guesses_left(),
        attempts_bar(game.guesses_left()).green()
    )?;
    writeln!(
        out,
        "Incorrect guesses: {}",
        format_letters(game.incorrect_guesses()).red()
    )
}

/// Print the end-of-game message
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome(out: &mut impl Write, outcome: Outcome, secret_word: &str) -> io::Result<()> {
    writeln!(out)?;
    match outcome {
        Outcome::Won => writeln!(
            out,
            "{}",
            format!("Congratulations! You've guessed the word: {secret_word}")
                .green()
                .bold()
        ),
        Outcome::Lost => {
            writeln!(out, "{}", gallows(0).bright_black())?;
            writeln!(
                out,
                "{}",
                format!("Game over! The word was: {secret_word}").red().bold()
            )
        }
    }
}

/// Print a summary of a saved game without revealing the word
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_saved_game(out: &mut impl Write, path: &Path, game: &Game) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(out, "Saved game: {}", path.display().to_string().bright_yellow())?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, "Word:              {}", game.display_progress())?;
    writeln!(out, "Letters hidden:    {}", game.remaining_letters())?;
    writeln!(out, "Guesses left:      {}", game.guesses_left())?;
    writeln!(
        out,
        "Correct guesses:   {}",
        format_letters(game.correct_guesses())
    )?;
    writeln!(
        out,
        "Incorrect guesses: {}",
        format_letters(game.incorrect_guesses())
    )?;

    let status = match game.outcome() {
        None => "in progress".normal(),
        Some(Outcome::Won) => "won".green(),
        Some(Outcome::Lost) => "lost".red(),
    };
    writeln!(out, "Status:            {status}")
}
