//! Save file inspection
//!
//! Shows the state of a saved game without resuming it.

use crate::core::Game;
use crate::error::SessionError;
use crate::output::print_saved_game;
use crate::persistence;
use std::io::Write;
use std::path::Path;

/// Load the save at `path` and print a summary to `out`
///
/// # Errors
///
/// Returns an error if the save cannot be loaded or `out` cannot be written.
pub fn inspect_save(path: &Path, out: &mut impl Write) -> Result<Game, SessionError> {
    let game = persistence::load(path)?;
    print_saved_game(out, path, &game)?;
    Ok(game)
}
