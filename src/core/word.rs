//! Secret word representation
//!
//! A `SecretWord` keeps the text as stored alongside a lowercase letter index
//! so membership checks are case-insensitive.

use crate::error::GameError;
use rustc_hash::FxHashSet;
use std::fmt;

/// Shortest word the dictionary will pick
pub const MIN_WORD_LEN: usize = 5;

/// Longest word the dictionary will pick
pub const MAX_WORD_LEN: usize = 12;

/// The word a player is trying to guess
///
/// Only emptiness is rejected; restored saves may carry any text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<char>,
}

impl SecretWord {
    /// Create a new secret word
    ///
    /// # Errors
    /// Returns `GameError::EmptySecretWord` if `text` is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Mango").unwrap();
    /// assert_eq!(word.text(), "Mango");
    /// assert!(word.has_letter('m'));
    ///
    /// assert!(SecretWord::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text = text.into();
        if text.is_empty() {
            return Err(GameError::EmptySecretWord);
        }

        let letters = text.chars().map(|c| c.to_ascii_lowercase()).collect();

        Ok(Self { text, letters })
    }

    /// Get the word as stored
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a letter, ignoring case
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    /// Iterate over the characters of the word as stored
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

/// Whether a word's length falls inside the playable range
#[must_use]
pub fn is_playable_length(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.chars().count())
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
