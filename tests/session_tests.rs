//! Integration tests for console sessions
//!
//! These tests drive full sessions with scripted input and verify:
//! - Winning and losing games end with the right message
//! - Saving mid-game ends the session and the save resumes exactly
//! - Invalid input never costs an attempt
//! - Load failures abort the session

use hangman::commands::{Console, PlayConfig, SessionEnd, run_session};
use hangman::core::Game;
use hangman::error::{PersistenceError, SessionError};
use hangman::persistence;
use hangman::wordlists::DictionarySource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn single_word_config(dir: &Path, word: &str) -> PlayConfig {
    let path = dir.join("words.txt");
    fs::write(&path, format!("a\nit\n{word}\n")).unwrap();
    PlayConfig {
        source: DictionarySource::File(path),
        ..PlayConfig::default()
    }
}

fn run(config: &PlayConfig, script: &str) -> (Result<SessionEnd, SessionError>, String) {
    colored::control::set_override(false);
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let result = run_session(&mut console, config, &mut StdRng::seed_from_u64(0));
    (result, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn test_mango_game_is_won() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");

    let (result, output) = run(&config, "no\nm\na\nx\nn\ng\no\n");

    assert_eq!(result.unwrap(), SessionEnd::Won("mango".to_string()));
    assert!(output.contains("Load a saved game? (yes/no): "));
    assert!(output.contains("Word: m _ _ _ _"));
    assert!(output.contains("Word: m a _ _ _"));
    assert!(output.contains("Guesses left: 5"));
    assert!(output.contains("Incorrect guesses: x"));
    assert!(output.contains("Congratulations! You've guessed the word: mango"));
    assert!(!output.contains("Game over!"));
}

#[test]
fn test_zebra_game_is_lost() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "zebra");

    let (result, output) = run(&config, "no\nq\nw\nj\nx\nv\nk\n");

    assert_eq!(result.unwrap(), SessionEnd::Lost("zebra".to_string()));
    assert!(output.contains("Incorrect guesses: q, w, j, x, v"));
    assert!(output.contains("Guesses left: 1"));
    assert!(output.contains("Game over! The word was: zebra"));
    assert!(!output.contains("Congratulations"));
}

#[test]
fn test_uppercase_guesses_count_as_lowercase() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");

    let (result, _) = run(&config, "no\nM\nA\nN\nG\nO\n");
    assert_eq!(result.unwrap(), SessionEnd::Won("mango".to_string()));
}

#[test]
fn test_save_mid_game_then_resume() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");
    let save_path = dir.path().join("out.sav");

    let script = format!("no\nm\nx\nsave\n{}\n", save_path.display());
    let (result, output) = run(&config, &script);

    assert_eq!(result.unwrap(), SessionEnd::Saved(save_path.clone()));
    assert!(output.contains("Exiting."));
    assert!(!output.contains("Congratulations"));
    assert!(!output.contains("Game over!"));

    let mut expected = Game::new("mango").unwrap();
    expected.apply_guess('m');
    expected.apply_guess('x');
    assert_eq!(persistence::load(&save_path).unwrap(), expected);

    // Resume through the load prompt and finish the game
    let script = format!("yes\n{}\na\nn\ng\no\n", save_path.display());
    let (result, output) = run(&config, &script);

    assert_eq!(result.unwrap(), SessionEnd::Won("mango".to_string()));
    assert!(output.contains("Word: m _ _ _ _"));
    assert!(output.contains("Incorrect guesses: x"));
    assert!(output.contains("Guesses left: 5"));
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");
    let save_path = dir.path().join("out.sav");
    fs::write(&save_path, "stale").unwrap();

    let script = format!("no\nsave\n{}\n", save_path.display());
    let (result, _) = run(&config, &script);

    assert!(matches!(result.unwrap(), SessionEnd::Saved(_)));
    assert_eq!(
        persistence::load(&save_path).unwrap(),
        Game::new("mango").unwrap()
    );
}

#[test]
fn test_failed_save_keeps_playing() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");
    let bad_path = dir.path().join("missing-dir").join("out.sav");

    let script = format!("no\nsave\n{}\nm\na\nn\ng\no\n", bad_path.display());
    let (result, output) = run(&config, &script);

    assert_eq!(result.unwrap(), SessionEnd::Won("mango".to_string()));
    assert!(output.contains("Could not save"));
    assert!(!bad_path.exists());
}

#[test]
fn test_invalid_input_does_not_consume_guesses() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");

    let (result, output) = run(&config, "no\nab\n7\n\nSAVE\nm\na\nn\ng\no\n");

    assert_eq!(result.unwrap(), SessionEnd::Won("mango".to_string()));
    assert!(output.contains("Invalid input 'ab'"));
    assert!(output.contains("Invalid input '7'"));
    assert!(output.contains("Invalid input ''"));
    assert!(output.contains("Invalid input 'SAVE'"));
    assert!(!output.contains("Guesses left: 5"));
    assert!(output.contains("Incorrect guesses: \n"));
}

#[test]
fn test_load_missing_save_aborts() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");

    let script = format!("y\n{}\nm\n", dir.path().join("nope.sav").display());
    let (result, output) = run(&config, &script);

    assert!(matches!(
        result,
        Err(SessionError::Persistence(PersistenceError::Read { .. }))
    ));
    assert!(!output.contains("Enter your guess"));
}

#[test]
fn test_load_malformed_save_aborts() {
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");
    let save_path = dir.path().join("bad.sav");
    fs::write(&save_path, "not a save").unwrap();

    let script = format!("yes\n{}\n", save_path.display());
    let (result, _) = run(&config, &script);

    assert!(matches!(
        result,
        Err(SessionError::Persistence(PersistenceError::Parse { .. }))
    ));
}

#[test]
fn test_loaded_finished_game_reports_immediately() {
    let dir = TempDir::new().unwrap();
    let save_path = dir.path().join("done.sav");
    // Fully revealed but out of guesses: the loss wins
    let game = Game::restore("zebra", 0, "zebra".chars().collect(), vec![]).unwrap();
    persistence::save(&game, &save_path).unwrap();

    let config = PlayConfig {
        load: Some(save_path),
        ..single_word_config(dir.path(), "mango")
    };
    let (result, output) = run(&config, "");

    assert_eq!(result.unwrap(), SessionEnd::Lost("zebra".to_string()));
    assert!(!output.contains("Enter your guess"));
}

#[test]
fn test_dictionary_without_candidates_aborts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "a\nan\nthe\n").unwrap();
    let config = PlayConfig {
        source: DictionarySource::File(path),
        ..PlayConfig::default()
    };

    let (result, _) = run(&config, "no\n");
    assert!(matches!(result, Err(SessionError::Dictionary(_))));
}

#[test]
fn test_embedded_dictionary_session_starts() {
    let config = PlayConfig {
        source: DictionarySource::Embedded,
        ..PlayConfig::default()
    };

    let (result, output) = run(&config, "no\nsave\n");

    // Script ends at the file name prompt
    assert!(matches!(result, Err(SessionError::InputClosed)));
    assert!(output.contains("Guesses left: 6"));
    assert!(output.contains("Enter a file name to save to: "));
}

#[test]
fn test_non_utf8_line_is_rejected_and_play_continues() {
    colored::control::set_override(false);
    let dir = TempDir::new().unwrap();
    let config = single_word_config(dir.path(), "mango");

    let mut script = b"no\nm\n".to_vec();
    script.extend_from_slice(&[0xE9, b'\n']);
    script.extend_from_slice(b"a\nn\ng\no\n");

    let mut console = Console::new(Cursor::new(script), Vec::new());
    let result = run_session(&mut console, &config, &mut StdRng::seed_from_u64(0));
    let output = String::from_utf8(console.into_output()).unwrap();

    assert_eq!(result.unwrap(), SessionEnd::Won("mango".to_string()));
    assert!(output.contains("Invalid input"));
    assert!(!output.contains("Guesses left: 5"));
}
