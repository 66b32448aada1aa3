//! Character templates: static starting data parsed from JSON.
//!
//! ## Format
//!
//! ```json
//! {
//!   "name": "Jason",
//!   "hp": 20,
//!   "shield": 0,
//!   "faces": [
//!     { "description": "Strike 3", "effects": [{ "effect": "attack", "amount": 3 }] },
//!     { "description": "Miss" }
//!   ]
//! }
//! ```
//!
//! Six templates ship with the crate; see [`BUILTIN_TEMPLATES`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CharacterIndex, GameError, PlayerIndex, Position, Result, TEAM_SIZE};
use crate::dice::Die;

use super::{Character, Team};

/// Built-in templates as (name, JSON) pairs.
pub const BUILTIN_TEMPLATES: [(&str, &str); 6] = [
    ("Jason", include_str!("../../templates/Jason.json")),
    ("Alicent", include_str!("../../templates/Alicent.json")),
    ("Robbert", include_str!("../../templates/Robbert.json")),
    ("Edward", include_str!("../../templates/Edward.json")),
    ("Fiona", include_str!("../../templates/Fiona.json")),
    ("George", include_str!("../../templates/George.json")),
];

/// Look up a built-in template's JSON by name.
pub fn builtin_template(name: &str) -> Result<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, json)| *json)
        .ok_or_else(|| GameError::InvalidTemplate(format!("no built-in template named {name:?}")))
}

/// Static description of a character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTemplate {
    pub name: String,
    pub hp: i64,
    #[serde(default)]
    pub shield: i64,
    pub faces: Die,
}

impl CharacterTemplate {
    /// Parse and validate a template.
    pub fn from_json(json: &str) -> Result<Self> {
        let template: Self =
            serde_json::from_str(json).map_err(|e| GameError::InvalidTemplate(e.to_string()))?;
        template.validate()?;
        Ok(template)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GameError::InvalidTemplate("empty name".to_string()));
        }
        if self.hp <= 0 {
            return Err(GameError::InvalidTemplate(format!(
                "{}: hp must be positive, got {}",
                self.name, self.hp
            )));
        }
        if self.shield < 0 {
            return Err(GameError::InvalidTemplate(format!(
                "{}: shield must not be negative, got {}",
                self.name, self.shield
            )));
        }
        Ok(())
    }

    /// Place this template on the board.
    ///
    /// The character starts unlocked, untargeted, showing its first face.
    #[must_use]
    pub fn instantiate(&self, position: Position) -> Character {
        Character {
            name: self.name.clone(),
            hp: self.hp,
            max_hp: self.hp,
            shield: self.shield,
            face: self.faces.first_face().clone(),
            die: self.faces.clone(),
            is_face_locked: false,
            position,
            target: None,
        }
    }
}

/// Build a team from exactly `TEAM_SIZE` template JSON strings.
///
/// Characters are placed in the given order. Positions name the first
/// player until [`create_player`](crate::players::create_player) assigns
/// the team to its seat.
pub fn create_team_from_templates(jsons: &[&str]) -> Result<Team> {
    if jsons.len() != TEAM_SIZE {
        return Err(GameError::InvalidTemplate(format!(
            "a team needs {TEAM_SIZE} templates, got {}",
            jsons.len()
        )));
    }

    let mut team: Team = SmallVec::new();
    for (slot, json) in CharacterIndex::all().zip(jsons) {
        let template = CharacterTemplate::from_json(json)?;
        team.push(template.instantiate(Position::new(PlayerIndex::First, slot)));
    }
    Ok(team)
}
