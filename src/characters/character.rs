//! Character instances.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Position, TEAM_SIZE};
use crate::dice::{Die, Face};

/// A team: exactly `TEAM_SIZE` characters in slot order.
///
/// SmallVec keeps the whole team inline, so cloning a state never
/// allocates for the roster itself.
pub type Team = SmallVec<[Character; TEAM_SIZE]>;

/// A character on the board.
///
/// Static data comes from a [`CharacterTemplate`](super::CharacterTemplate);
/// everything else changes as the game progresses. Changes are made on a
/// clone and the clone replaces the old value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub hp: i64,
    /// Starting hp; heals never exceed this.
    pub max_hp: i64,
    pub shield: i64,
    pub die: Die,
    /// Currently showing face.
    pub face: Face,
    /// Locked faces survive rolls.
    pub is_face_locked: bool,
    pub position: Position,
    /// Opposing character this one acts against. Assigned every round.
    pub target: Option<Position>,
}

impl Character {
    /// A character is defeated once its hp reaches 0.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Apply damage: shield absorbs first, the rest comes off hp.
    pub fn take_damage(&mut self, amount: i64) {
        let absorbed = amount.min(self.shield).max(0);
        self.shield -= absorbed;
        self.take_piercing_damage(amount.saturating_sub(absorbed));
    }

    /// Apply damage that ignores shield.
    pub fn take_piercing_damage(&mut self, amount: i64) {
        self.hp = self.hp.saturating_sub(amount.max(0)).max(0);
    }

    /// Restore hp, capped at `max_hp`.
    pub fn heal(&mut self, amount: i64) {
        self.hp = self.hp.saturating_add(amount.max(0)).min(self.max_hp);
    }

    /// Add shield. Saturates at `i64::MAX`.
    pub fn add_shield(&mut self, amount: i64) {
        self.shield = self.shield.saturating_add(amount.max(0));
    }
}
