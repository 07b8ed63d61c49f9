//! Hangman - CLI
//!
//! Play Hangman in the terminal, or inspect a saved game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{PlayConfig, SessionEnd, inspect_save, run_play},
    error::SessionError,
    logging,
    wordlists::{DEFAULT_DICTIONARY_PATH, DictionarySource},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (bundled list) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: String,

    /// Seed the word picker for a reproducible game
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Resume this save file without asking
        #[arg(short, long)]
        load: Option<PathBuf>,
    },

    /// Show the state of a save file without playing
    Inspect {
        /// Save file to read
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { load: None });

    match command {
        Commands::Play { load } => {
            let config = PlayConfig {
                source: DictionarySource::from_arg(&cli.dictionary),
                load,
                seed: cli.seed,
            };
            run_play_command(&config)
        }
        Commands::Inspect { file } => run_inspect_command(&file),
    }
}

fn run_play_command(config: &PlayConfig) -> Result<()> {
    match run_play(config) {
        Ok(SessionEnd::Saved(path)) => {
            tracing::info!(path = %path.display(), "session saved");
            Ok(())
        }
        Ok(SessionEnd::Won(_) | SessionEnd::Lost(_)) => Ok(()),
        Err(SessionError::InputClosed) => {
            println!("\nInput closed. Goodbye!");
            Ok(())
        }
        Err(e @ SessionError::Dictionary(_)) => {
            Err(e).with_context(|| format!("could not start a game from {}", config.source))
        }
        Err(e) => Err(e.into()),
    }
}

fn run_inspect_command(file: &std::path::Path) -> Result<()> {
    let mut stdout = std::io::stdout();
    inspect_save(file, &mut stdout)
        .with_context(|| format!("could not inspect {}", file.display()))?;
    Ok(())
}
