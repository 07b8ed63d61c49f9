//! Hangman game state
//!
//! A `Game` holds the secret word, the remaining attempts and the letters
//! guessed so far. It only changes through [`Game::apply_guess`].

use super::word::SecretWord;
use crate::error::GameError;
use crate::wordlists::Dictionary;
use rand::Rng;
use tracing::debug;

/// Attempts a fresh game starts with
pub const MAX_GUESSES: i32 = 6;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Result of feeding one letter to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Incorrect,
    AlreadyGuessed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret_word: SecretWord,
    guesses_left: i32,
    correct_guesses: Vec<char>,
    incorrect_guesses: Vec<char>,
}

impl Game {
    /// Start a fresh game around a known word
    ///
    /// # Errors
    /// Returns `GameError::EmptySecretWord` if `secret_word` is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Game;
    ///
    /// let mut game = Game::new("mango").unwrap();
    /// game.apply_guess('m');
    /// assert_eq!(game.display_progress(), "m _ _ _ _");
    /// ```
    pub fn new(secret_word: impl Into<String>) -> Result<Self, GameError> {
        Self::restore(secret_word, MAX_GUESSES, Vec::new(), Vec::new())
    }

    /// Start a fresh game with a word picked uniformly from `dictionary`
    pub fn random<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> Self {
        let secret_word = dictionary.choose(rng).clone();
        debug!(length = secret_word.len(), "picked secret word");

        Self {
            secret_word,
            guesses_left: MAX_GUESSES,
            correct_guesses: Vec::new(),
            incorrect_guesses: Vec::new(),
        }
    }

    /// Rebuild a game from stored fields, taken verbatim
    ///
    /// No consistency checks are made between the fields.
    ///
    /// # Errors
    /// Returns `GameError::EmptySecretWord` if `secret_word` is empty.
    pub fn restore(
        secret_word: impl Into<String>,
        guesses_left: i32,
        correct_guesses: Vec<char>,
        incorrect_guesses: Vec<char>,
    ) -> Result<Self, GameError> {
        Ok(Self {
            secret_word: SecretWord::new(secret_word)?,
            guesses_left,
            correct_guesses,
            incorrect_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn secret_word(&self) -> &SecretWord {
        &self.secret_word
    }

    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> i32 {
        self.guesses_left
    }

    #[inline]
    #[must_use]
    pub fn correct_guesses(&self) -> &[char] {
        &self.correct_guesses
    }

    /// Wrong letters in the order they were guessed
    #[inline]
    #[must_use]
    pub fn incorrect_guesses(&self) -> &[char] {
        &self.incorrect_guesses
    }

    /// Whether `letter` was already guessed, right or wrong
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        self.correct_guesses.contains(&letter) || self.incorrect_guesses.contains(&letter)
    }

    /// Apply one guessed letter
    ///
    /// The letter is lowercased first. Repeating a letter changes nothing.
    /// Callers must check [`Game::is_valid_guess`] before calling.
    pub fn apply_guess(&mut self, letter: char) -> GuessResult {
        let letter = letter.to_ascii_lowercase();

        if self.has_guessed(letter) {
            return GuessResult::AlreadyGuessed;
        }

        if self.secret_word.has_letter(letter) {
            self.correct_guesses.push(letter);
            debug!(%letter, "correct guess");
            GuessResult::Correct
        } else {
            self.incorrect_guesses.push(letter);
            self.guesses_left = self.guesses_left.saturating_sub(1);
            debug!(%letter, guesses_left = self.guesses_left, "incorrect guess");
            GuessResult::Incorrect
        }
    }

    fn is_revealed(&self, c: char) -> bool {
        self.correct_guesses.contains(&c.to_ascii_lowercase())
    }

    /// Render the word with unguessed characters as `_`, space separated
    #[must_use]
    pub fn display_progress(&self) -> String {
        self.secret_word
            .chars()
            .map(|c| if self.is_revealed(c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of positions still hidden
    #[must_use]
    pub fn remaining_letters(&self) -> usize {
        self.secret_word
            .chars()
            .filter(|&c| !self.is_revealed(c))
            .count()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.guesses_left <= 0 || self.remaining_letters() == 0
    }

    /// Outcome once the game is over; running out of guesses wins ties
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.guesses_left <= 0 {
            Some(Outcome::Lost)
        } else if self.remaining_letters() == 0 {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    /// True iff `input` is a single ASCII letter
    #[must_use]
    pub fn is_valid_guess(input: &str) -> bool {
        let mut chars = input.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
    }
}
