//! Core types: positions, the player pair, state, RNG, configuration, errors.
//!
//! Everything else in the crate is built from these.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_HISTORY_LIMIT, DEFAULT_ROLLS_PER_ROUND};
pub use error::{GameError, Result};
pub use player::PlayerPair;
pub use position::{CharacterIndex, PlayerIndex, Position, TEAM_SIZE};
pub use rng::{GameRng, GameRngState, RngStream};
pub use state::GameState;
