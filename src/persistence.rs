//! Save files
//!
//! A game is stored as one pretty-printed JSON object with four named
//! fields. Loading trusts whatever the file holds.

use crate::core::Game;
use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// On-disk shape of a saved game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub secret_word: String,
    pub guesses_left: i32,
    pub correct_guesses: Vec<char>,
    pub incorrect_guesses: Vec<char>,
}

impl From<&Game> for SaveRecord {
    fn from(game: &Game) -> Self {
        Self {
            secret_word: game.secret_word().text().to_string(),
            guesses_left: game.guesses_left(),
            correct_guesses: game.correct_guesses().to_vec(),
            incorrect_guesses: game.incorrect_guesses().to_vec(),
        }
    }
}

/// Write `game` to `path`, replacing any existing file
///
/// # Errors
///
/// Returns `PersistenceError::Write` if the file cannot be written.
pub fn save<P: AsRef<Path>>(game: &Game, path: P) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let write_error = |source: std::io::Error| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut contents = serde_json::to_string_pretty(&SaveRecord::from(game))
        .map_err(|e| write_error(e.into()))?;
    contents.push('\n');
    fs::write(path, contents).map_err(write_error)?;

    info!(path = %path.display(), "saved game");
    Ok(())
}

/// Read a game back from `path`
///
/// # Errors
///
/// Returns `PersistenceError::Read` if the file cannot be read and
/// `PersistenceError::Parse` if it is not a well-formed save record.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Game, PersistenceError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |reason: String| PersistenceError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let record: SaveRecord =
        serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?;
    let game = Game::restore(
        record.secret_word,
        record.guesses_left,
        record.correct_guesses,
        record.incorrect_guesses,
    )
    .map_err(|e| parse_error(e.to_string()))?;

    info!(path = %path.display(), "loaded game");
    Ok(game)
}
