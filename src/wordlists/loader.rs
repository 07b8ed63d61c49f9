//! Dictionary loading utilities
//!
//! Builds the candidate list from a file or from the embedded constant,
//! keeping only words of playable length.

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN, SecretWord, is_playable_length};
use crate::error::DictionaryError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Candidate secret words, all between 5 and 12 characters
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<SecretWord>,
}

impl Dictionary {
    /// Load candidates from a newline-delimited file
    ///
    /// Lines are trimmed and blank lines skipped; case is kept as stored.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Unavailable` if the file cannot be read and
    /// `DictionaryError::NoCandidateWords` if no line has a playable length.
    ///
    /// # Examples
    /// ```no_run
    /// use hangman::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load("google-10000-english-no-swears.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(content.lines())?;
        info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Build candidates from an in-memory list
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::NoCandidateWords` if nothing survives the
    /// length filter.
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "mango", "zebra"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<SecretWord> = words
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                if is_playable_length(trimmed) {
                    SecretWord::new(trimmed).ok()
                } else {
                    None
                }
            })
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::NoCandidateWords {
                min: MIN_WORD_LEN,
                max: MAX_WORD_LEN,
            });
        }

        debug!(candidates = words.len(), "filtered dictionary");
        Ok(Self { words })
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        // Construction guarantees at least one word
        self.words
            .choose(rng)
            .unwrap_or_else(|| unreachable!("dictionary is never empty"))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false once constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the candidates in file order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(SecretWord::text)
    }
}
