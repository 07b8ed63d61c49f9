//! Interactive console game
//!
//! Line-oriented Hangman over any reader/writer pair. The binary wires it
//! to stdin and stdout; tests feed scripted input.

use crate::core::{Game, GuessResult, Outcome};
use crate::error::SessionError;
use crate::output::{print_outcome, print_turn, print_welcome};
use crate::persistence;
use crate::wordlists::DictionarySource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Input that saves the game and ends the session
pub const SAVE_COMMAND: &str = "save";

/// Settings for one session
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Where fresh games draw their secret word from
    pub source: DictionarySource,
    /// Resume this save instead of asking
    pub load: Option<PathBuf>,
    /// Seed for reproducible word picks
    pub seed: Option<u64>,
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Saved(PathBuf),
    Won(String),
    Lost(String),
}

/// Prompting wrapper around an input and output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input and output stream
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Stream prompts and game output are written to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console and return its output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Get user input with a prompt
    ///
    /// Bytes that are not valid UTF-8 are replaced, so such a line reaches
    /// the caller as ordinary (invalid) input.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` at end of input and
    /// `SessionError::Io` if reading or writing fails.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    fn prompt_file_name(&mut self, prompt: &str) -> Result<PathBuf, SessionError> {
        loop {
            let name = self.prompt(prompt)?;
            if !name.is_empty() {
                return Ok(PathBuf::from(name));
            }
            writeln!(self.output, "Please enter a file name.")?;
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, SessionError> {
        let answer = self.prompt(prompt)?.to_lowercase();
        Ok(matches!(answer.as_str(), "yes" | "y"))
    }
}

/// Run the game on stdin and stdout
///
/// # Errors
///
/// See [`run_session`].
pub fn run_play(config: &PlayConfig) -> Result<SessionEnd, SessionError> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_session(&mut console, config, &mut rng)
}

/// Play one session to completion
///
/// # Errors
///
/// Returns an error if the dictionary or the requested save cannot be
/// loaded, if console I/O fails, or if input ends mid-game. A failed save
/// is reported on the console and play continues.
pub fn run_session<R, W, G>(
    console: &mut Console<R, W>,
    config: &PlayConfig,
    rng: &mut G,
) -> Result<SessionEnd, SessionError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    print_welcome(console.output())?;

    let mut game = start_game(console, config, rng)?;
    info!(length = game.secret_word().len(), "session started");

    while !game.is_game_over() {
        print_turn(console.output(), &game)?;

        let input = console.prompt("Enter your guess")?;

        if input == SAVE_COMMAND {
            let path = console.prompt_file_name("Enter a file name to save to")?;
            match persistence::save(&game, &path) {
                Ok(()) => {
                    writeln!(
                        console.output(),
                        "Game saved to {}. Exiting.",
                        path.display()
                    )?;
                    return Ok(SessionEnd::Saved(path));
                }
                Err(e) => {
                    warn!(error = %e, "save failed");
                    writeln!(console.output(), "Could not save: {e}")?;
                    continue;
                }
            }
        }

        let letter = match input.chars().next() {
            Some(letter) if Game::is_valid_guess(&input) => letter,
            _ => {
                writeln!(
                    console.output(),
                    "Invalid input '{input}'. Please enter a single letter."
                )?;
                continue;
            }
        };

        if game.apply_guess(letter) == GuessResult::AlreadyGuessed {
            writeln!(
                console.output(),
                "You already guessed '{}'.",
                letter.to_ascii_lowercase()
            )?;
        }
    }

    let secret_word = game.secret_word().text().to_string();
    let outcome = if game.guesses_left() > 0 {
        Outcome::Won
    } else {
        Outcome::Lost
    };
    info!(?outcome, guesses_left = game.guesses_left(), "game finished");
    print_outcome(console.output(), outcome, &secret_word)?;

    Ok(match outcome {
        Outcome::Won => SessionEnd::Won(secret_word),
        Outcome::Lost => SessionEnd::Lost(secret_word),
    })
}

fn start_game<R, W, G>(
    console: &mut Console<R, W>,
    config: &PlayConfig,
    rng: &mut G,
) -> Result<Game, SessionError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let save_path = if let Some(path) = &config.load {
        Some(path.clone())
    } else if console.confirm("Load a saved game? (yes/no)")? {
        Some(console.prompt_file_name("Enter the save file name")?)
    } else {
        None
    };

    if let Some(path) = save_path {
        let game = persistence::load(&path)?;
        writeln!(console.output(), "Loaded game from {}.", path.display())?;
        return Ok(game);
    }

    let dictionary = config.source.load()?;
    Ok(Game::random(&dictionary, rng))
}
