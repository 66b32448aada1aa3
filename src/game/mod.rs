//! The game controller: the single owner of the current state.
//!
//! [`Game`] wraps the pure services of the other modules into the actions
//! a front-end offers (roll, lock, next round, undo) and keeps the
//! authoritative `GameState` between them.

mod controller;
mod history;
mod log;

pub use controller::{Game, Phase, RoundOutcome};
pub use history::History;
pub use log::log_game_state;
