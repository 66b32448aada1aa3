//! Win/loss rules.
//!
//! The game ends when every character on a team is defeated. The check is
//! a pure function of the state, so a front-end can ask at any time
//! whether the board shows a finished game.

pub mod outcome;

pub use outcome::{check_game_over, GameResult};
