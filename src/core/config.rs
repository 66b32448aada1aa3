//! Game configuration.
//!
//! A `GameConfig` names the character templates for each team and sets
//! the round rules. It can be built in code or loaded from JSON; missing
//! JSON fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Default number of rolls per round.
pub const DEFAULT_ROLLS_PER_ROUND: u8 = 3;

/// Default number of undo snapshots kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rolls available at the start of every round.
    #[serde(default = "default_rolls_per_round")]
    pub rolls_per_round: u8,

    /// RNG seed. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Built-in template names for the first player's team.
    #[serde(default = "default_first_team")]
    pub first_team: Vec<String>,

    /// Built-in template names for the second player's team.
    #[serde(default = "default_second_team")]
    pub second_team: Vec<String>,

    /// Maximum undo snapshots kept. 0 disables undo.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_rolls_per_round() -> u8 {
    DEFAULT_ROLLS_PER_ROUND
}

fn default_first_team() -> Vec<String> {
    vec!["Jason".into(), "Alicent".into(), "Robbert".into()]
}

fn default_second_team() -> Vec<String> {
    vec!["Edward".into(), "Fiona".into(), "George".into()]
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rolls_per_round: default_rolls_per_round(),
            seed: None,
            first_team: default_first_team(),
            second_team: default_second_team(),
            history_limit: default_history_limit(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with default teams and rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of rolls per round.
    #[must_use]
    pub fn with_rolls_per_round(mut self, rolls: u8) -> Self {
        self.rolls_per_round = rolls;
        self
    }

    /// Set both teams by template name.
    #[must_use]
    pub fn with_teams(
        mut self,
        first: impl IntoIterator<Item = impl Into<String>>,
        second: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.first_team = first.into_iter().map(Into::into).collect();
        self.second_team = second.into_iter().map(Into::into).collect();
        self
    }

    /// Set the undo history depth.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
