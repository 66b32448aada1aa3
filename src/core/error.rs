//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

use super::position::Position;

/// Errors raised by game services and the game controller.
///
/// The end-of-game notification is not an error: see
/// [`RoundOutcome::GameOver`](crate::game::RoundOutcome::GameOver).
#[derive(Error, Debug)]
pub enum GameError {
    /// An index outside its closed range.
    #[error("invalid {kind} index: {index}")]
    InvalidIndex { kind: &'static str, index: usize },

    /// Malformed or inconsistent character data.
    #[error("invalid character template: {0}")]
    InvalidTemplate(String),

    /// A configuration file that could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The requested action is not allowed in the current phase.
    #[error("illegal transition: {0}")]
    IllegalTransition(&'static str),

    /// All rolls for this round have been used.
    #[error("no rolls left this round")]
    NoRollsLeft,

    /// A targeted effect was enqueued for a character without a target.
    #[error("character at {0} has no target assigned")]
    MissingTarget(Position),

    /// A die face references an effect that is not in the registry.
    #[error("unknown effect: {0}")]
    UnknownEffect(String),

    #[error("nothing to undo")]
    NothingToUndo,

    /// Snapshot encoding or decoding failed.
    #[error("snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Shorthand used throughout the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;
