//! Property tests over random seeds and action sequences.

use std::sync::Arc;

use proptest::prelude::*;

use goodlock::core::GameRng;
use goodlock::players::assign_targets;
use goodlock::{CharacterIndex, EffectRegistry, Game, GameConfig, GameError, PlayerIndex, RoundOutcome};

fn game(seed: u64) -> Game {
    Game::new(GameConfig::new().with_seed(seed), Arc::new(EffectRegistry::with_defaults())).unwrap()
}

fn seat(first: bool) -> PlayerIndex {
    if first {
        PlayerIndex::First
    } else {
        PlayerIndex::Second
    }
}

#[derive(Clone, Debug)]
enum Step {
    Roll,
    Lock(bool, usize),
    Next,
    Undo,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Roll),
        2 => (any::<bool>(), 0..3usize).prop_map(|(p, c)| Step::Lock(p, c)),
        2 => Just(Step::Next),
        1 => Just(Step::Undo),
    ]
}

proptest! {
    #[test]
    fn locked_faces_never_change_on_roll(seed in any::<u64>(), locks in prop::collection::vec(any::<bool>(), 6)) {
        let mut g = game(seed);
        g.roll_dice().unwrap();

        for (i, &locked) in locks.iter().enumerate() {
            if locked {
                g.toggle_die_lock(seat(i < 3), CharacterIndex::SLOTS[i % 3]).unwrap();
            }
        }
        let before = g.state().clone();

        g.roll_dice().unwrap();

        for (old, new) in before.characters().zip(g.state().characters()) {
            prop_assert_eq!(old.is_face_locked, new.is_face_locked);
            if old.is_face_locked {
                prop_assert_eq!(&old.face, &new.face);
            }
            prop_assert_eq!(old.hp, new.hp);
        }
        prop_assert_eq!(g.state().rolls_left, before.rolls_left - 1);
    }

    #[test]
    fn toggling_twice_is_identity(seed in any::<u64>(), first in any::<bool>(), slot in 0..3usize) {
        let mut g = game(seed);
        g.roll_dice().unwrap();
        let before = g.state().clone();

        g.toggle_die_lock(seat(first), CharacterIndex::SLOTS[slot]).unwrap();
        g.toggle_die_lock(seat(first), CharacterIndex::SLOTS[slot]).unwrap();

        prop_assert_eq!(g.state(), &before);
    }

    #[test]
    fn targets_always_name_a_living_opponent_slot(seed in any::<u64>()) {
        let g = game(seed);
        let targeted = assign_targets(g.state(), &mut GameRng::new(seed)).unwrap();

        for c in targeted.characters() {
            let target = c.target.unwrap();
            prop_assert_eq!(target.player, c.position.player.opponent());
            prop_assert!(target.character.index() < 3);
        }
    }

    #[test]
    fn random_play_keeps_invariants(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..60)) {
        let mut g = game(seed);
        let rolls_per_round = g.config().rolls_per_round;

        for s in steps {
            let round_before = g.state().current_round;
            let result = match s {
                Step::Roll => g.roll_dice(),
                Step::Lock(p, c) => g.toggle_die_lock(seat(p), CharacterIndex::SLOTS[c]),
                Step::Next => g.next_round().map(|outcome| {
                    if let RoundOutcome::Advanced { round } = outcome {
                        assert_eq!(round, round_before + 1);
                    }
                }),
                Step::Undo => g.undo(),
            };

            match result {
                Ok(())
                | Err(GameError::NoRollsLeft)
                | Err(GameError::NothingToUndo)
                | Err(GameError::IllegalTransition(_)) => {}
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }

            let state = g.state();
            prop_assert!(state.rolls_left <= rolls_per_round);
            prop_assert!(state.current_round >= 1);
            for c in state.characters() {
                prop_assert!(c.hp >= 0 && c.hp <= c.max_hp);
                prop_assert!(c.shield >= 0);
            }
        }
    }
}
