//! Word lists for Hangman
//!
//! The candidate dictionary comes from a file on disk or from the list
//! compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use loader::Dictionary;

use crate::error::DictionaryError;
use std::fmt;
use std::path::PathBuf;

/// Dictionary read when no `--dictionary` flag is given
pub const DEFAULT_DICTIONARY_PATH: &str = "google-10000-english-no-swears.txt";

/// Where the candidate words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Embedded,
    File(PathBuf),
}

impl DictionarySource {
    /// Parse the `--dictionary` flag: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the dictionary this source points at
    ///
    /// # Errors
    ///
    /// Propagates `DictionaryError` from reading or filtering the words.
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        match self {
            Self::Embedded => Dictionary::from_words(EMBEDDED_WORDS),
            Self::File(path) => Dictionary::load(path),
        }
    }
}

impl Default for DictionarySource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_DICTIONARY_PATH))
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded word list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
