//! Command implementations

pub mod inspect;
pub mod play;

pub use inspect::inspect_save;
pub use play::{Console, PlayConfig, SAVE_COMMAND, SessionEnd, run_play, run_session};
