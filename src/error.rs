//! Error types
//!
//! One enum per component so callers can match on the failure they care about.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while building the candidate word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary unavailable at {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dictionary has no words between {min} and {max} letters")]
    NoCandidateWords { min: usize, max: usize },
}

/// Failures constructing a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("secret word must not be empty")]
    EmptySecretWord,
}

/// Failures reading or writing a save file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not read save file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write save file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save file {path} is malformed: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Failures that end an interactive session early.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before the game finished")]
    InputClosed,
}
