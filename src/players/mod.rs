//! Players and the per-player services.
//!
//! Every service takes a `Player` (or the pair of them) by reference and
//! returns a new value; none of them mutates its input.
//!
//! - [`create_player`]: seat a team
//! - [`roll_dice_for_turn`]: reroll every unlocked, living character
//! - [`toggle_die_lock_for_character`]: flip one lock flag
//! - [`select_target_of_character`]: point one character at an opponent
//! - [`assign_targets`]: random targets for both teams
//! - [`has_lost`]: loss predicate

mod player;
mod targeting;

pub use player::{create_player, has_lost, roll_dice_for_turn, toggle_die_lock_for_character, Player};
pub use targeting::{assign_targets, select_target_of_character};
