//! Diagnostic state dumps.

use tracing::debug;

use crate::core::GameState;

/// Emit the whole board at `debug` level, one event per character.
pub fn log_game_state(state: &GameState) {
    debug!(round = state.current_round, rolls_left = state.rolls_left, "game state");
    for character in state.characters() {
        debug!(
            position = %character.position,
            character = %character.name,
            hp = character.hp,
            shield = character.shield,
            face = %character.face,
            locked = character.is_face_locked,
            targeting = ?character.target,
            "character state"
        );
    }
}
