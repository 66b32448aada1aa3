//! Effect definitions.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// What an effect does to each receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectAction {
    /// Absorbed by shield first, remainder comes off hp.
    Damage,
    /// Comes straight off hp.
    PiercingDamage,
    /// Adds shield.
    Shield,
    /// Restores hp up to the character's maximum.
    Heal,
}

/// Who receives an effect, relative to the character whose face shows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTarget {
    /// The character itself.
    Own,
    /// The character's assigned target on the opposing team.
    Target,
    /// Every character on the character's own team.
    OwnTeam,
    /// Every character on the opposing team.
    EnemyTeam,
}

impl EffectTarget {
    /// Does resolving this effect need an assigned target?
    #[must_use]
    pub fn needs_target(self) -> bool {
        matches!(self, EffectTarget::Target)
    }
}

/// A named effect and its resolution rules.
///
/// Higher `priority` resolves earlier in the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectDefinition {
    pub name: String,
    pub priority: i32,
    pub action: EffectAction,
    pub target: EffectTarget,
}

impl EffectDefinition {
    pub fn new(name: impl Into<String>, priority: i32, action: EffectAction, target: EffectTarget) -> Self {
        Self {
            name: name.into(),
            priority,
            action,
            target,
        }
    }
}

/// One effect bound to a single receiver, ready to resolve.
///
/// Produced from a face effect once the receiver list is known.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEffect {
    /// Registry name, kept for logging.
    pub name: String,
    pub priority: i32,
    pub action: EffectAction,
    pub amount: i64,
    /// Character whose face produced the effect.
    pub source: Position,
    /// Character the effect applies to.
    pub receiver: Position,
}
