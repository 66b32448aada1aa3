//! Closed index types for addressing players and characters.
//!
//! ## PlayerIndex
//!
//! A game always has exactly two players, so the index is an enum rather
//! than a number. Conversion from raw integers is fallible.
//!
//! ## CharacterIndex
//!
//! Newtype over `u8`, valid in `0..TEAM_SIZE`.
//!
//! ## Position
//!
//! A (player, character) pair identifying one character on the board.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Number of characters on every team.
pub const TEAM_SIZE: usize = 3;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerIndex {
    First,
    Second,
}

impl PlayerIndex {
    /// Both players in seat order.
    pub const ALL: [PlayerIndex; 2] = [PlayerIndex::First, PlayerIndex::Second];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerIndex::First => 0,
            PlayerIndex::Second => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerIndex::First => PlayerIndex::Second,
            PlayerIndex::Second => PlayerIndex::First,
        }
    }
}

impl TryFrom<usize> for PlayerIndex {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(PlayerIndex::First),
            1 => Ok(PlayerIndex::Second),
            _ => Err(GameError::InvalidIndex { kind: "player", index }),
        }
    }
}

impl std::fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Slot of a character within its team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CharacterIndex(u8);

impl CharacterIndex {
    /// Every slot in team order.
    pub const SLOTS: [CharacterIndex; TEAM_SIZE] = [CharacterIndex(0), CharacterIndex(1), CharacterIndex(2)];

    /// Create a character index, checking it against `TEAM_SIZE`.
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index < TEAM_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(GameError::InvalidIndex { kind: "character", index })
        }
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every slot in team order.
    ///
    /// ```
    /// use goodlock::core::CharacterIndex;
    ///
    /// let slots: Vec<_> = CharacterIndex::all().map(CharacterIndex::index).collect();
    /// assert_eq!(slots, vec![0, 1, 2]);
    /// ```
    pub fn all() -> impl Iterator<Item = CharacterIndex> {
        Self::SLOTS.into_iter()
    }
}

impl TryFrom<usize> for CharacterIndex {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl TryFrom<u8> for CharacterIndex {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index as usize)
    }
}

impl From<CharacterIndex> for u8 {
    fn from(index: CharacterIndex) -> Self {
        index.0
    }
}

/// Location of a character on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub player: PlayerIndex,
    pub character: CharacterIndex,
}

impl Position {
    #[must_use]
    pub const fn new(player: PlayerIndex, character: CharacterIndex) -> Self {
        Self { player, character }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.player, self.character.index() + 1)
    }
}
