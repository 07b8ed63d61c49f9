//! Core domain types for Hangman
//!
//! The secret word and the game state. Everything here is pure apart from
//! the random word pick, and free of console or file I/O.

mod game;
mod word;

pub use game::{Game, GuessResult, MAX_GUESSES, Outcome};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, SecretWord, is_playable_length};
