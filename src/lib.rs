//! # goodlock
//!
//! Control loop for a two-player, turn-based dice battle game.
//!
//! Each player fields a team of three characters. Every character owns a
//! six-faced die whose faces carry effects (attack, shield, heal and so
//! on). A round goes:
//!
//! 1. Both players roll their unlocked dice, up to `rolls_per_round` times,
//!    locking faces they want to keep
//! 2. `next_round` gives every living character a random enemy target
//! 3. Every face effect is queued and resolved by priority, shields first
//!
//! The game ends when a whole team is defeated.
//!
//! ## Design Principles
//!
//! - **States are values**: every service takes a `GameState` and returns a
//!   new one. Only [`game::Game`] holds the authoritative state.
//!
//! - **Explicit registry**: the effect table is built once and passed in,
//!   so nothing depends on global initialization order.
//!
//! - **Reproducible**: a seeded [`GameRng`] drives every random draw, and
//!   a saved game continues exactly as the uninterrupted one would.
//!
//! ## Modules
//!
//! - `core`: positions, state, RNG, configuration, errors
//! - `dice`: faces and dice
//! - `characters`: characters and JSON templates
//! - `players`: players, rolling, locking, targeting
//! - `effects`: effect definitions, registry, resolution
//! - `stack`: the priority queue that orders a round's effects
//! - `rules`: loss detection
//! - `game`: the controller, undo history, state logging
//! - `render`: text view of the board

pub mod core;
pub mod dice;
pub mod characters;
pub mod players;
pub mod effects;
pub mod stack;
pub mod rules;
pub mod game;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    CharacterIndex, GameConfig, GameError, GameRng, GameRngState, GameState, PlayerIndex,
    PlayerPair, Position, Result, TEAM_SIZE,
};

pub use crate::dice::{Die, Face, FaceEffect};

pub use crate::characters::{Character, CharacterTemplate, Team};

pub use crate::players::Player;

pub use crate::effects::{EffectAction, EffectDefinition, EffectRegistry, EffectTarget, PendingEffect};

pub use crate::stack::{resolve_effects, PriorityQueue};

pub use crate::rules::{check_game_over, GameResult};

pub use crate::game::{Game, Phase, RoundOutcome};

pub use crate::render::BoardView;
