//! Terminal output formatting
//!
//! Plain-text rendering for the console game and the inspect command.

pub mod display;
pub mod formatters;

pub use display::{print_outcome, print_saved_game, print_turn, print_welcome};
