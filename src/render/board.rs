//! `BoardView`: the board as plain text.

use std::fmt;

use crate::characters::Character;
use crate::core::GameState;

/// Label of the lock control for a character.
#[must_use]
pub fn lock_label(character: &Character) -> &'static str {
    if character.is_face_locked {
        "Unlock Die"
    } else {
        "Lock Die"
    }
}

/// Borrowing text view of a `GameState`.
///
/// ```text
/// Round: 1
///
/// Player 1
///   Jason
///     HP: 20/20  Shield: 0
///     Active Die Face: Strike 3
///     [Lock Die]
///   ...
///
/// [Roll Dice (3 left)]  [Next Round]
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a>(pub &'a GameState);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        writeln!(f, "Round: {}", state.current_round)?;

        for (seat, player) in state.players.iter() {
            writeln!(f)?;
            writeln!(f, "{seat}")?;
            for character in player.team() {
                write_character(f, character)?;
            }
        }

        writeln!(f)?;
        write!(f, "[Roll Dice ({} left)]  [Next Round]", state.rolls_left)
    }
}

fn write_character(f: &mut fmt::Formatter<'_>, character: &Character) -> fmt::Result {
    let status = if character.is_defeated() { " (defeated)" } else { "" };
    writeln!(f, "  {}{status}", character.name)?;
    writeln!(
        f,
        "    HP: {}/{}  Shield: {}",
        character.hp, character.max_hp, character.shield
    )?;
    writeln!(f, "    Active Die Face: {}", character.face)?;
    if let Some(target) = character.target {
        writeln!(f, "    Target: {target}")?;
    }
    writeln!(f, "    [{}]", lock_label(character))
}
