//! Effect registry for definition lookup.
//!
//! The `EffectRegistry` maps the effect names printed on die faces to
//! their definitions. Build it once, wrap it in an `Arc`, and hand it to
//! every game that uses the same rules.

use rustc_hash::FxHashMap;

use crate::characters::Team;
use crate::core::{GameError, Result};
use crate::dice::Face;

use super::{EffectAction, EffectDefinition, EffectTarget};

/// Registry of effect definitions.
///
/// ## Example
///
/// ```
/// use goodlock::effects::{EffectAction, EffectDefinition, EffectRegistry, EffectTarget};
///
/// let mut registry = EffectRegistry::new();
/// registry.register(EffectDefinition::new("poke", 1, EffectAction::Damage, EffectTarget::Target));
///
/// assert_eq!(registry.get("poke").unwrap().priority, 1);
/// assert!(registry.get("attack").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectRegistry {
    effects: FxHashMap<String, EffectDefinition>,
}

impl EffectRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard effects used by the built-in templates.
    ///
    /// | name   | priority | action         | target    |
    /// |--------|----------|----------------|-----------|
    /// | shield | 30       | Shield         | Own       |
    /// | guard  | 30       | Shield         | OwnTeam   |
    /// | heal   | 20       | Heal           | Own       |
    /// | attack | 10       | Damage         | Target    |
    /// | pierce | 10       | PiercingDamage | Target    |
    /// | sweep  | 5        | Damage         | EnemyTeam |
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for def in [
            EffectDefinition::new("shield", 30, EffectAction::Shield, EffectTarget::Own),
            EffectDefinition::new("guard", 30, EffectAction::Shield, EffectTarget::OwnTeam),
            EffectDefinition::new("heal", 20, EffectAction::Heal, EffectTarget::Own),
            EffectDefinition::new("attack", 10, EffectAction::Damage, EffectTarget::Target),
            EffectDefinition::new("pierce", 10, EffectAction::PiercingDamage, EffectTarget::Target),
            EffectDefinition::new("sweep", 5, EffectAction::Damage, EffectTarget::EnemyTeam),
        ] {
            registry.register(def);
        }
        registry
    }

    /// Register a definition, returning the one it replaced, if any.
    pub fn register(&mut self, definition: EffectDefinition) -> Option<EffectDefinition> {
        self.effects.insert(definition.name.clone(), definition)
    }

    /// Get a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EffectDefinition> {
        self.effects.get(name)
    }

    /// Get a definition by name, failing with `UnknownEffect`.
    pub fn lookup(&self, name: &str) -> Result<&EffectDefinition> {
        self.get(name)
            .ok_or_else(|| GameError::UnknownEffect(name.to_string()))
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &EffectDefinition> {
        self.effects.values()
    }

    /// Check that every effect on a face is registered.
    pub fn validate_face(&self, face: &Face) -> Result<()> {
        for effect in &face.effects {
            self.lookup(&effect.effect)?;
        }
        Ok(())
    }

    /// Check every face of every die on a team.
    pub fn validate_team(&self, team: &Team) -> Result<()> {
        for character in team {
            for face in character.die.faces() {
                self.validate_face(face)?;
            }
        }
        Ok(())
    }
}
