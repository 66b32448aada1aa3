//! Game state: the value every transition consumes and produces.
//!
//! `GameState` is a plain value. Operations either return a new state or
//! take `self` by value, so a caller holding an older state is never
//! affected by a later transition.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::PlayerPair;
use super::position::{PlayerIndex, Position};
use crate::characters::Character;
use crate::players::Player;

/// Complete state of a game between actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct GameState {
    /// Both players, by seat.
    pub players: PlayerPair<Player>,

    /// Rolls remaining this round. Never below 0.
    pub rolls_left: u8,

    /// Round number (starts at 1).
    pub current_round: u32,
}

/// Wire form of a `GameState`; seats are checked on the way in.
#[derive(Deserialize)]
struct RawState {
    players: PlayerPair<Player>,
    rolls_left: u8,
    current_round: u32,
}

impl TryFrom<RawState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawState) -> Result<Self> {
        let (first, second) = raw.players.into_values();
        let mut state = Self::new(first, second, raw.rolls_left)?;
        state.current_round = raw.current_round;
        Ok(state)
    }
}

impl GameState {
    /// Create the initial state for two players.
    ///
    /// Each player must sit in the seat matching its `player_index`.
    pub fn new(first: Player, second: Player, rolls_per_round: u8) -> Result<Self> {
        for (expected, player) in [(PlayerIndex::First, &first), (PlayerIndex::Second, &second)] {
            if player.player_index() != expected {
                return Err(GameError::InvalidIndex {
                    kind: "player",
                    index: player.player_index().index(),
                });
            }
        }

        Ok(Self {
            players: PlayerPair::from_values(first, second),
            rolls_left: rolls_per_round,
            current_round: 1,
        })
    }

    #[must_use]
    pub fn player(&self, player: PlayerIndex) -> &Player {
        &self.players[player]
    }

    /// Return a new state with one seat replaced.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        let seat = player.player_index();
        self.players = self.players.with(seat, player);
        self
    }

    /// Character at a board position.
    #[must_use]
    pub fn character(&self, position: Position) -> &Character {
        self.players[position.player].character(position.character)
    }

    pub(crate) fn character_mut(&mut self, position: Position) -> &mut Character {
        self.players[position.player].character_mut(position.character)
    }

    /// Iterate over every character, first player's team first.
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.players.iter().flat_map(|(_, p)| p.team().iter())
    }

    /// Begin the next round: rolls refilled, round counter advanced.
    #[must_use]
    pub fn start_next_round(mut self, rolls_per_round: u8) -> Self {
        self.rolls_left = rolls_per_round;
        self.current_round += 1;
        self
    }

    // === Snapshots ===

    /// Encode this state with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
