//! Target selection.
//!
//! Targets always point at the opposing team. `assign_targets` runs two
//! passes, first player then second; each pass draws one random slot per
//! living character, in team order.

use crate::core::{CharacterIndex, GameError, GameRng, GameState, Position, Result};

use super::Player;

/// Point the character in `character` at `target`.
///
/// `target` must lie on the opposing team.
pub fn select_target_of_character(
    player: &Player,
    character: CharacterIndex,
    target: Position,
) -> Result<Player> {
    if target.player == player.player_index() {
        return Err(GameError::InvalidIndex {
            kind: "target player",
            index: target.player.index(),
        });
    }

    let mut next = player.clone();
    next.character_mut(character).target = Some(target);
    Ok(next)
}

/// Give every living character a uniformly random target on the other team.
///
/// Defeated characters have their target cleared.
pub fn assign_targets(state: &GameState, rng: &mut GameRng) -> Result<GameState> {
    let mut next = state.clone();

    for (seat, player) in state.players.iter() {
        let opponent = seat.opponent();
        let mut updated = player.clone();

        for character in player.team() {
            let slot = character.position.character;
            if character.is_defeated() {
                updated.character_mut(slot).target = None;
                continue;
            }
            let target = rng.roll_random_position(opponent);
            updated = select_target_of_character(&updated, slot, target)?;
        }

        next = next.with_player(updated);
    }

    Ok(next)
}
