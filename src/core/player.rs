//! Per-player data storage for a two-player game.
//!
//! `PlayerPair<T>` holds exactly one value per seat and is indexed by
//! `PlayerIndex`, so "exactly two players" is a property of the type
//! rather than something checked at runtime.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::PlayerIndex;

/// One value per player, indexed by `PlayerIndex`.
///
/// ## Example
///
/// ```
/// use goodlock::core::{PlayerIndex, PlayerPair};
///
/// let mut score = PlayerPair::new(|_| 0);
/// score[PlayerIndex::Second] = 3;
///
/// assert_eq!(score[PlayerIndex::First], 0);
/// assert_eq!(score[PlayerIndex::Second], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    ///
    /// The factory receives the `PlayerIndex` for each seat.
    pub fn new(factory: impl Fn(PlayerIndex) -> T) -> Self {
        Self {
            data: [factory(PlayerIndex::First), factory(PlayerIndex::Second)],
        }
    }

    /// Create a pair from explicit values, first seat first.
    pub fn from_values(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerIndex) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerIndex) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Return a new pair with one seat replaced.
    #[must_use]
    pub fn with(mut self, player: PlayerIndex, value: T) -> Self {
        self.data[player.index()] = value;
        self
    }

    /// Apply a transformation to both seats.
    pub fn map<U>(self, mut f: impl FnMut(PlayerIndex, T) -> U) -> PlayerPair<U> {
        let [first, second] = self.data;
        PlayerPair {
            data: [f(PlayerIndex::First, first), f(PlayerIndex::Second, second)],
        }
    }

    /// Iterate over (PlayerIndex, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerIndex, &T)> {
        PlayerIndex::ALL.into_iter().zip(self.data.iter())
    }

    /// Destructure into (first, second).
    pub fn into_values(self) -> (T, T) {
        let [first, second] = self.data;
        (first, second)
    }
}

impl<T> Index<PlayerIndex> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerIndex) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerIndex> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerIndex) -> &mut Self::Output {
        self.get_mut(player)
    }
}
