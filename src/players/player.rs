//! The `Player` record and its dice services.

use serde::{Deserialize, Serialize};

use crate::characters::{Character, Team};
use crate::core::{CharacterIndex, GameError, GameRng, PlayerIndex, Position, Result, TEAM_SIZE};

/// A seated player and their team.
///
/// The team always holds exactly `TEAM_SIZE` characters whose positions
/// name this player's seat. Every `Player`, including a decoded one, is
/// built by [`create_player`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeatedTeam")]
pub struct Player {
    team: Team,
    player_index: PlayerIndex,
}

/// Wire form of a `Player`, checked on the way in.
#[derive(Deserialize)]
struct SeatedTeam {
    team: Team,
    player_index: PlayerIndex,
}

impl TryFrom<SeatedTeam> for Player {
    type Error = GameError;

    fn try_from(seated: SeatedTeam) -> Result<Self> {
        create_player(seated.team, seated.player_index)
    }
}

impl Player {
    #[must_use]
    pub fn team(&self) -> &Team {
        &self.team
    }

    #[must_use]
    pub fn player_index(&self) -> PlayerIndex {
        self.player_index
    }

    /// Character in a slot.
    #[must_use]
    pub fn character(&self, index: CharacterIndex) -> &Character {
        &self.team[index.index()]
    }

    pub(crate) fn character_mut(&mut self, index: CharacterIndex) -> &mut Character {
        &mut self.team[index.index()]
    }

    /// Characters with hp above 0.
    pub fn living(&self) -> impl Iterator<Item = &Character> {
        self.team.iter().filter(|c| !c.is_defeated())
    }
}

/// Seat a team, stamping every character with its final position.
pub fn create_player(mut team: Team, player_index: PlayerIndex) -> Result<Player> {
    if team.len() != TEAM_SIZE {
        return Err(GameError::InvalidTemplate(format!(
            "a team needs {TEAM_SIZE} characters, got {}",
            team.len()
        )));
    }

    for (slot, character) in CharacterIndex::all().zip(team.iter_mut()) {
        character.position = Position::new(player_index, slot);
    }

    Ok(Player { team, player_index })
}

/// Roll every die that is unlocked and belongs to a living character.
///
/// Locked faces and the faces of defeated characters are kept as they are.
#[must_use]
pub fn roll_dice_for_turn(player: &Player, rng: &mut GameRng) -> Player {
    let mut next = player.clone();
    for character in next.team.iter_mut() {
        if character.is_face_locked || character.is_defeated() {
            continue;
        }
        character.face = character.die.roll(rng);
    }
    next
}

/// A player has lost once every character on their team is defeated.
#[must_use]
pub fn has_lost(player: &Player) -> bool {
    player.team.iter().all(Character::is_defeated)
}

/// Flip the lock flag of the character at `position`.
///
/// `position.player` must be this player's seat.
pub fn toggle_die_lock_for_character(player: &Player, position: Position) -> Result<Player> {
    if position.player != player.player_index {
        return Err(GameError::InvalidIndex {
            kind: "player",
            index: position.player.index(),
        });
    }

    let mut next = player.clone();
    let character = next.character_mut(position.character);
    character.is_face_locked = !character.is_face_locked;
    Ok(next)
}
