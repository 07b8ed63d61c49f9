//! Hangman
//!
//! A console word-guessing game with save and resume.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, Outcome};
//!
//! let mut game = Game::new("mango").unwrap();
//! for letter in ['m', 'a', 'n', 'g', 'o'] {
//!     game.apply_guess(letter);
//! }
//!
//! assert_eq!(game.display_progress(), "m a n g o");
//! assert_eq!(game.outcome(), Some(Outcome::Won));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Save files
pub mod persistence;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostics
pub mod logging;
