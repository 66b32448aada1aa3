//! Effect resolution - turning faces into pending effects and applying them.

use tracing::trace;

use crate::core::{CharacterIndex, GameError, GameState, Position, Result};

use super::{EffectAction, EffectRegistry, EffectTarget, PendingEffect};

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect applied.
    Success,
    /// Receiver was already defeated; nothing changed.
    Skipped,
}

/// Collects and applies effects.
pub struct EffectResolver;

impl EffectResolver {
    /// Expand the active face of every living character into pending
    /// effects, one per receiver.
    ///
    /// Order: first player's team, then second's; within a character, face
    /// effect order; within a team-wide effect, slot order.
    pub fn collect(state: &GameState, registry: &EffectRegistry) -> Result<Vec<PendingEffect>> {
        let mut pending = Vec::new();

        for character in state.characters().filter(|c| !c.is_defeated()) {
            for face_effect in &character.face.effects {
                let definition = registry.lookup(&face_effect.effect)?;
                let source = character.position;

                let receivers: Vec<Position> = match definition.target {
                    EffectTarget::Own => vec![source],
                    EffectTarget::Target => {
                        vec![character.target.ok_or(GameError::MissingTarget(source))?]
                    }
                    EffectTarget::OwnTeam => team_positions(source.player),
                    EffectTarget::EnemyTeam => team_positions(source.player.opponent()),
                };

                pending.extend(receivers.into_iter().map(|receiver| PendingEffect {
                    name: definition.name.clone(),
                    priority: definition.priority,
                    action: definition.action,
                    amount: face_effect.amount,
                    source,
                    receiver,
                }));
            }
        }

        Ok(pending)
    }

    /// Apply one pending effect to its receiver.
    ///
    /// Effects on a defeated receiver are skipped. The source's own state
    /// is not consulted, so effects collected at round start still land if
    /// their source falls during resolution.
    pub fn resolve_single(state: &mut GameState, effect: &PendingEffect) -> ResolveResult {
        let receiver = state.character_mut(effect.receiver);
        if receiver.is_defeated() {
            trace!(effect = %effect.name, receiver = %effect.receiver, "skipped: receiver defeated");
            return ResolveResult::Skipped;
        }

        match effect.action {
            EffectAction::Damage => receiver.take_damage(effect.amount),
            EffectAction::PiercingDamage => receiver.take_piercing_damage(effect.amount),
            EffectAction::Shield => receiver.add_shield(effect.amount),
            EffectAction::Heal => receiver.heal(effect.amount),
        }

        trace!(
            effect = %effect.name,
            amount = effect.amount,
            source = %effect.source,
            receiver = %effect.receiver,
            hp = receiver.hp,
            shield = receiver.shield,
            "resolved"
        );
        ResolveResult::Success
    }
}

fn team_positions(player: crate::core::PlayerIndex) -> Vec<Position> {
    CharacterIndex::all().map(|slot| Position::new(player, slot)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::{builtin_template, create_team_from_templates};
    use crate::core::PlayerIndex;
    use crate::dice::Face;
    use crate::players::create_player;

    fn state() -> GameState {
        let team = |names: [&str; 3]| {
            let jsons: Vec<&str> = names.iter().map(|n| builtin_template(n).unwrap()).collect();
            create_team_from_templates(&jsons).unwrap()
        };
        GameState::new(
            create_player(team(["Jason", "Alicent", "Robbert"]), PlayerIndex::First).unwrap(),
            create_player(team(["Edward", "Fiona", "George"]), PlayerIndex::Second).unwrap(),
            3,
        )
        .unwrap()
    }

    fn pos(player: PlayerIndex, slot: usize) -> Position {
        Position::new(player, CharacterIndex::SLOTS[slot])
    }

    /// Give every character a blank face so tests control exactly what fires.
    fn blank(mut state: GameState) -> GameState {
        for player in PlayerIndex::ALL {
            for slot in 0..3 {
                state.character_mut(pos(player, slot)).face = Face::blank("Miss");
            }
        }
        state
    }

    #[test]
    fn test_collect_blank_faces_is_empty() {
        let registry = EffectRegistry::with_defaults();
        let pending = EffectResolver::collect(&blank(state()), &registry).unwrap();
        assert!(pending.is_empty());
    }

    #[test]
    fn test_collect_targeted_requires_target() {
        let registry = EffectRegistry::with_defaults();
        let mut s = blank(state());
        let jason = pos(PlayerIndex::First, 0);
        s.character_mut(jason).face = Face::single("Strike 3", "attack", 3);

        assert!(matches!(
            EffectResolver::collect(&s, &registry),
            Err(GameError::MissingTarget(p)) if p == jason
        ));

        let fiona = pos(PlayerIndex::Second, 1);
        s.character_mut(jason).target = Some(fiona);
        let pending = EffectResolver::collect(&s, &registry).unwrap();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].receiver, fiona);
        assert_eq!(pending[0].source, jason);
        assert_eq!(pending[0].action, EffectAction::Damage);
    }

    #[test]
    fn test_collect_team_effects_expand_per_receiver() {
        let registry = EffectRegistry::with_defaults();
        let mut s = blank(state());
        s.character_mut(pos(PlayerIndex::Second, 1)).face = Face::single("Fireball 2", "sweep", 2);
        s.character_mut(pos(PlayerIndex::First, 1)).face = Face::single("Guard 1", "guard", 1);

        let pending = EffectResolver::collect(&s, &registry).unwrap();

        assert_eq!(pending.len(), 6);
        let sweep: Vec<_> = pending.iter().filter(|p| p.name == "sweep").collect();
        assert!(sweep.iter().all(|p| p.receiver.player == PlayerIndex::First));
        let guard: Vec<_> = pending.iter().filter(|p| p.name == "guard").collect();
        assert!(guard.iter().all(|p| p.receiver.player == PlayerIndex::First));
    }

    #[test]
    fn test_collect_skips_defeated_sources() {
        let registry = EffectRegistry::with_defaults();
        let mut s = blank(state());
        let alicent = pos(PlayerIndex::First, 1);
        s.character_mut(alicent).face = Face::single("Heal 3", "heal", 3);
        s.character_mut(alicent).hp = 0;

        assert!(EffectResolver::collect(&s, &registry).unwrap().is_empty());
    }

    #[test]
    fn test_collect_unknown_effect() {
        let registry = EffectRegistry::with_defaults();
        let mut s = blank(state());
        s.character_mut(pos(PlayerIndex::First, 0)).face = Face::single("Teleport", "teleport", 1);

        assert!(matches!(
            EffectResolver::collect(&s, &registry),
            Err(GameError::UnknownEffect(_))
        ));
    }

    #[test]
    fn test_resolve_single_actions() {
        let mut s = state();
        let fiona = pos(PlayerIndex::Second, 1);
        let effect = |action, amount| PendingEffect {
            name: "test".to_string(),
            priority: 0,
            action,
            amount,
            source: pos(PlayerIndex::First, 0),
            receiver: fiona,
        };

        EffectResolver::resolve_single(&mut s, &effect(EffectAction::Shield, 2));
        assert_eq!(s.character(fiona).shield, 2);

        EffectResolver::resolve_single(&mut s, &effect(EffectAction::Damage, 5));
        assert_eq!(s.character(fiona).shield, 0);
        assert_eq!(s.character(fiona).hp, 14 - 3);

        EffectResolver::resolve_single(&mut s, &effect(EffectAction::PiercingDamage, 1));
        assert_eq!(s.character(fiona).hp, 10);

        EffectResolver::resolve_single(&mut s, &effect(EffectAction::Heal, 10));
        assert_eq!(s.character(fiona).hp, 14);
    }

    #[test]
    fn test_resolve_single_skips_defeated_receiver() {
        let mut s = state();
        let fiona = pos(PlayerIndex::Second, 1);
        s.character_mut(fiona).hp = 0;

        let heal = PendingEffect {
            name: "heal".to_string(),
            priority: 20,
            action: EffectAction::Heal,
            amount: 5,
            source: fiona,
            receiver: fiona,
        };

        assert_eq!(EffectResolver::resolve_single(&mut s, &heal), ResolveResult::Skipped);
        assert_eq!(s.character(fiona).hp, 0);
    }
}
