//! Game result and loss detection.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerIndex};
use crate::players::has_lost;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerIndex),
    /// Both teams fell in the same round.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerIndex) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} Wins!"),
            GameResult::Draw => f.write_str("Draw!"),
        }
    }
}

/// Check if the game is over.
///
/// Returns `Some(result)` if either team is fully defeated, `None` if the
/// game continues.
#[must_use]
pub fn check_game_over(state: &GameState) -> Option<GameResult> {
    let first_lost = has_lost(state.player(PlayerIndex::First));
    let second_lost = has_lost(state.player(PlayerIndex::Second));

    match (first_lost, second_lost) {
        (true, true) => Some(GameResult::Draw),
        (true, false) => Some(GameResult::Winner(PlayerIndex::Second)),
        (false, true) => Some(GameResult::Winner(PlayerIndex::First)),
        (false, false) => None,
    }
}
