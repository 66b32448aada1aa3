//! Game state container and round state machine.
//!
//! ## Phases
//!
//! - `Playing`: every action is available
//! - `Ended`: a team was found defeated; every action except `undo` fails
//!   with `IllegalTransition`
//!
//! ## Round advancement
//!
//! `next_round` checks for a loss on the state as it stands *before* the
//! round resolves. A round whose effects defeat a team therefore reports
//! the game over on the following call, giving the front-end one more look
//! at the board first.

use std::mem;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::characters::{builtin_template, create_team_from_templates, Team};
use crate::core::{
    CharacterIndex, GameConfig, GameError, GameRng, GameRngState, GameState, PlayerIndex, Position,
    Result, RngStream,
};
use crate::effects::EffectRegistry;
use crate::players::{assign_targets, create_player, roll_dice_for_turn, toggle_die_lock_for_character};
use crate::rules::{check_game_over, GameResult};
use crate::stack::resolve_effects;

use super::history::History;
use super::log::log_game_state;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Ended(GameResult),
}

/// What a call to [`Game::next_round`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Effects resolved; the game is now in `round`.
    Advanced { round: u32 },
    /// A team was already defeated; nothing changed and the game has ended.
    GameOver(GameResult),
}

/// Everything needed to resume a game.
#[derive(Serialize, Deserialize)]
struct SavedGame {
    config: GameConfig,
    state: GameState,
    phase: Phase,
    dice_rng: GameRngState,
    target_rng: GameRngState,
}

/// A running game.
///
/// ## Example
///
/// ```
/// use goodlock::effects::EffectRegistry;
/// use goodlock::game::{Game, RoundOutcome};
/// use goodlock::GameConfig;
///
/// let mut game = Game::new(GameConfig::new().with_seed(7), EffectRegistry::with_defaults().into()).unwrap();
///
/// game.roll_dice().unwrap();
/// assert_eq!(game.state().rolls_left, 2);
///
/// let outcome = game.next_round().unwrap();
/// assert_eq!(outcome, RoundOutcome::Advanced { round: 2 });
/// assert_eq!(game.state().rolls_left, 3);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    registry: Arc<EffectRegistry>,
    state: GameState,
    phase: Phase,
    dice_rng: GameRng,
    target_rng: GameRng,
    history: History,
}

impl Game {
    /// Start a game with the built-in templates named in `config`.
    pub fn new(config: GameConfig, registry: Arc<EffectRegistry>) -> Result<Self> {
        let first = team_from_names(&config.first_team)?;
        let second = team_from_names(&config.second_team)?;
        Self::from_teams(config, registry, first, second)
    }

    /// Start a game with explicit teams.
    ///
    /// Every face on both teams must use registered effects.
    pub fn from_teams(
        config: GameConfig,
        registry: Arc<EffectRegistry>,
        first: Team,
        second: Team,
    ) -> Result<Self> {
        registry.validate_team(&first)?;
        registry.validate_team(&second)?;

        let state = GameState::new(
            create_player(first, PlayerIndex::First)?,
            create_player(second, PlayerIndex::Second)?,
            config.rolls_per_round,
        )?;

        let root = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = root.seed(), "new game");

        Ok(Self {
            history: History::new(config.history_limit),
            dice_rng: root.split(RngStream::Dice),
            target_rng: root.split(RngStream::Targets),
            config,
            registry,
            state,
            phase: Phase::Playing,
        })
    }

    // === Accessors ===

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    /// Loss check on the current state, without changing phase.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        check_game_over(&self.state)
    }

    /// Number of states `undo` can step back through.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    // === Actions ===

    /// Roll every unlocked die on both teams.
    ///
    /// Fails with `NoRollsLeft` once the round's rolls are spent.
    pub fn roll_dice(&mut self) -> Result<()> {
        self.ensure_playing()?;
        if self.state.rolls_left == 0 {
            return Err(GameError::NoRollsLeft);
        }

        let rng = &mut self.dice_rng;
        let players = self
            .state
            .players
            .clone()
            .map(|_, player| roll_dice_for_turn(&player, rng));
        let next = GameState {
            players,
            rolls_left: self.state.rolls_left - 1,
            current_round: self.state.current_round,
        };

        debug!(rolls_left = next.rolls_left, "dice rolled");
        self.commit(next);
        Ok(())
    }

    /// Lock or unlock one character's die.
    pub fn toggle_die_lock(&mut self, player: PlayerIndex, character: CharacterIndex) -> Result<()> {
        self.ensure_playing()?;

        let updated =
            toggle_die_lock_for_character(self.state.player(player), Position::new(player, character))?;
        let next = self.state.clone().with_player(updated);

        debug!(%player, slot = character.index(), "die lock toggled");
        self.commit(next);
        Ok(())
    }

    /// Assign fresh random targets without resolving the round.
    pub fn assign_targets(&mut self) -> Result<()> {
        self.ensure_playing()?;
        let next = assign_targets(&self.state, &mut self.target_rng)?;
        self.commit(next);
        Ok(())
    }

    /// Advance to the next round.
    ///
    /// Checks for a defeated team first; if one is found the game ends and
    /// the state is left as it was. Otherwise: targets are assigned,
    /// effects resolve in priority order, rolls are refilled and the round
    /// counter goes up by one.
    pub fn next_round(&mut self) -> Result<RoundOutcome> {
        self.ensure_playing()?;

        if let Some(result) = check_game_over(&self.state) {
            self.phase = Phase::Ended(result);
            info!(%result, round = self.state.current_round, "game over");
            return Ok(RoundOutcome::GameOver(result));
        }

        let targeted = assign_targets(&self.state, &mut self.target_rng)?;
        log_game_state(&targeted);

        let resolved = resolve_effects(targeted, &self.registry)?;
        let next = resolved.start_next_round(self.config.rolls_per_round);
        let round = next.current_round;

        self.commit(next);
        info!(round, "round advanced");
        Ok(RoundOutcome::Advanced { round })
    }

    /// Step back to the state before the last action.
    ///
    /// Also reopens an ended game. Random streams are not rewound.
    pub fn undo(&mut self) -> Result<()> {
        let previous = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.state = previous;
        self.phase = Phase::Playing;
        debug!(round = self.state.current_round, "undo");
        Ok(())
    }

    // === Snapshots ===

    /// Encode the game with bincode. Undo history is not included.
    pub fn save(&self) -> Result<Vec<u8>> {
        let saved = SavedGame {
            config: self.config.clone(),
            state: self.state.clone(),
            phase: self.phase,
            dice_rng: self.dice_rng.state(),
            target_rng: self.target_rng.state(),
        };
        Ok(bincode::serialize(&saved)?)
    }

    /// Resume a game produced by [`Game::save`].
    ///
    /// Decoding re-checks team sizes and seats; a malformed snapshot fails
    /// with `Snapshot`, and faces using unregistered effects fail with
    /// `UnknownEffect`.
    pub fn load(bytes: &[u8], registry: Arc<EffectRegistry>) -> Result<Self> {
        let saved: SavedGame = bincode::deserialize(bytes)?;
        for (_, player) in saved.state.players.iter() {
            registry.validate_team(player.team())?;
        }

        Ok(Self {
            history: History::new(saved.config.history_limit),
            dice_rng: GameRng::from_state(&saved.dice_rng),
            target_rng: GameRng::from_state(&saved.target_rng),
            config: saved.config,
            registry,
            state: saved.state,
            phase: saved.phase,
        })
    }

    // === Internals ===

    fn ensure_playing(&self) -> Result<()> {
        match self.phase {
            Phase::Playing => Ok(()),
            Phase::Ended(_) => Err(GameError::IllegalTransition("the game has ended")),
        }
    }

    /// Replace the current state, keeping the old one for undo.
    fn commit(&mut self, next: GameState) {
        let previous = mem::replace(&mut self.state, next);
        self.history.push(previous);
    }
}

fn team_from_names(names: &[String]) -> Result<Team> {
    let jsons = names
        .iter()
        .map(|name| builtin_template(name))
        .collect::<Result<Vec<_>>>()?;
    create_team_from_templates(&jsons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Face;

    fn game(seed: u64) -> Game {
        Game::new(
            GameConfig::new().with_seed(seed),
            Arc::new(EffectRegistry::with_defaults()),
        )
        .unwrap()
    }

    fn defeat_team(game: &mut Game, player: PlayerIndex) {
        for slot in CharacterIndex::all() {
            game.state.character_mut(Position::new(player, slot)).hp = 0;
        }
    }

    #[test]
    fn test_initial_game() {
        let g = game(1);

        assert_eq!(g.phase(), Phase::Playing);
        assert_eq!(g.state().rolls_left, 3);
        assert_eq!(g.state().current_round, 1);
        assert_eq!(g.outcome(), None);
        assert_eq!(g.undo_depth(), 0);
    }

    #[test]
    fn test_unknown_builtin_name() {
        let config = GameConfig::new()
            .with_teams(["Jason", "Alicent", "Nobody"], ["Edward", "Fiona", "George"]);
        assert!(matches!(
            Game::new(config, Arc::new(EffectRegistry::with_defaults())),
            Err(GameError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_registry_must_cover_faces() {
        assert!(matches!(
            Game::new(GameConfig::new().with_seed(1), Arc::new(EffectRegistry::new())),
            Err(GameError::UnknownEffect(_))
        ));
    }

    #[test]
    fn test_roll_until_exhausted() {
        let mut g = game(2);

        for expected in [2, 1, 0] {
            g.roll_dice().unwrap();
            assert_eq!(g.state().rolls_left, expected);
        }

        let before = g.state().clone();
        assert!(matches!(g.roll_dice(), Err(GameError::NoRollsLeft)));
        assert_eq!(g.state(), &before);
    }

    #[test]
    fn test_toggle_lock_twice_restores() {
        let mut g = game(3);
        let before = g.state().clone();

        g.toggle_die_lock(PlayerIndex::Second, CharacterIndex::SLOTS[1]).unwrap();
        assert!(g.state().player(PlayerIndex::Second).team()[1].is_face_locked);
        assert_eq!(g.state().player(PlayerIndex::First), before.player(PlayerIndex::First));

        g.toggle_die_lock(PlayerIndex::Second, CharacterIndex::SLOTS[1]).unwrap();
        assert_eq!(g.state(), &before);
    }

    #[test]
    fn test_assign_targets_action() {
        let mut g = game(4);
        g.assign_targets().unwrap();

        for c in g.state().characters() {
            assert_eq!(c.target.unwrap().player, c.position.player.opponent());
        }
        assert_eq!(g.state().current_round, 1);
    }

    #[test]
    fn test_next_round_advances() {
        let mut g = game(5);
        g.roll_dice().unwrap();
        g.roll_dice().unwrap();

        assert_eq!(g.next_round().unwrap(), RoundOutcome::Advanced { round: 2 });
        assert_eq!(g.state().rolls_left, 3);
        assert_eq!(g.state().current_round, 2);
    }

    #[test]
    fn test_next_round_applies_effects() {
        let mut g = game(6);
        // Everyone on the second team blocks; everyone on the first attacks
        for slot in CharacterIndex::all() {
            g.state.character_mut(Position::new(PlayerIndex::First, slot)).face =
                Face::single("Strike 3", "attack", 3);
            g.state.character_mut(Position::new(PlayerIndex::Second, slot)).face =
                Face::blank("Miss");
        }
        let hp_before: i64 = g.state().player(PlayerIndex::Second).team().iter().map(|c| c.hp + c.shield).sum();

        g.next_round().unwrap();

        let hp_after: i64 = g.state().player(PlayerIndex::Second).team().iter().map(|c| c.hp + c.shield).sum();
        assert_eq!(hp_before - hp_after, 9);
    }

    #[test]
    fn test_game_over_leaves_state_untouched() {
        let mut g = game(7);
        defeat_team(&mut g, PlayerIndex::Second);
        let before = g.state().clone();

        let outcome = g.next_round().unwrap();

        assert_eq!(outcome, RoundOutcome::GameOver(GameResult::Winner(PlayerIndex::First)));
        assert_eq!(g.phase(), Phase::Ended(GameResult::Winner(PlayerIndex::First)));
        assert_eq!(g.state(), &before);
    }

    #[test]
    fn test_actions_refused_after_game_over() {
        let mut g = game(8);
        defeat_team(&mut g, PlayerIndex::First);
        g.next_round().unwrap();

        assert!(matches!(g.next_round(), Err(GameError::IllegalTransition(_))));
        assert!(matches!(g.roll_dice(), Err(GameError::IllegalTransition(_))));
        assert!(matches!(
            g.toggle_die_lock(PlayerIndex::First, CharacterIndex::SLOTS[0]),
            Err(GameError::IllegalTransition(_))
        ));
        assert!(matches!(g.assign_targets(), Err(GameError::IllegalTransition(_))));
    }

    #[test]
    fn test_loss_detected_one_call_late() {
        let mut g = game(9);
        // Second team on 1 hp, no shields; first team sweeps
        for slot in CharacterIndex::all() {
            let enemy = g.state.character_mut(Position::new(PlayerIndex::Second, slot));
            enemy.hp = 1;
            enemy.shield = 0;
            enemy.face = Face::blank("Miss");
            g.state.character_mut(Position::new(PlayerIndex::First, slot)).face =
                Face::single("Fireball 2", "sweep", 2);
        }

        // The killing round still advances
        assert_eq!(g.next_round().unwrap(), RoundOutcome::Advanced { round: 2 });
        assert_eq!(g.outcome(), Some(GameResult::Winner(PlayerIndex::First)));
        assert_eq!(g.phase(), Phase::Playing);

        // The next request reports it
        assert_eq!(
            g.next_round().unwrap(),
            RoundOutcome::GameOver(GameResult::Winner(PlayerIndex::First))
        );
    }

    #[test]
    fn test_undo() {
        let mut g = game(10);
        let initial = g.state().clone();

        g.roll_dice().unwrap();
        g.toggle_die_lock(PlayerIndex::First, CharacterIndex::SLOTS[0]).unwrap();
        assert_eq!(g.undo_depth(), 2);

        g.undo().unwrap();
        g.undo().unwrap();
        assert_eq!(g.state(), &initial);
        assert!(matches!(g.undo(), Err(GameError::NothingToUndo)));
    }

    #[test]
    fn test_undo_reopens_ended_game() {
        let mut g = game(11);
        g.roll_dice().unwrap();
        defeat_team(&mut g, PlayerIndex::First);
        g.next_round().unwrap();

        g.undo().unwrap();
        assert_eq!(g.phase(), Phase::Playing);
        assert_eq!(g.outcome(), None);
    }

    #[test]
    fn test_save_load_continues_identically() {
        let mut g = game(12);
        g.roll_dice().unwrap();
        g.next_round().unwrap();

        let bytes = g.save().unwrap();
        let mut restored = Game::load(&bytes, Arc::new(EffectRegistry::with_defaults())).unwrap();
        assert_eq!(restored.state(), g.state());
        assert_eq!(restored.phase(), g.phase());

        g.roll_dice().unwrap();
        restored.roll_dice().unwrap();
        g.next_round().unwrap();
        restored.next_round().unwrap();
        assert_eq!(restored.state(), g.state());
    }

    #[test]
    fn test_load_garbage() {
        assert!(matches!(
            Game::load(&[1, 2, 3], Arc::new(EffectRegistry::with_defaults())),
            Err(GameError::Snapshot(_))
        ));
    }

    #[test]
    fn test_load_rejects_short_team() {
        // Same wire layout as `SavedGame`, but with unchecked teams
        #[derive(Serialize)]
        struct Seat {
            team: Team,
            player_index: PlayerIndex,
        }
        #[derive(Serialize)]
        struct Board {
            players: [Seat; 2],
            rolls_left: u8,
            current_round: u32,
        }
        #[derive(Serialize)]
        struct Snapshot {
            config: GameConfig,
            state: Board,
            phase: Phase,
            dice_rng: GameRngState,
            target_rng: GameRngState,
        }

        let g = game(14);
        let seat = |player: PlayerIndex, keep: usize| Seat {
            team: g.state().player(player).team().iter().take(keep).cloned().collect(),
            player_index: player,
        };
        let encode = |keep: usize| {
            bincode::serialize(&Snapshot {
                config: g.config().clone(),
                state: Board {
                    players: [seat(PlayerIndex::First, 3), seat(PlayerIndex::Second, keep)],
                    rolls_left: 3,
                    current_round: 1,
                },
                phase: Phase::Playing,
                dice_rng: g.dice_rng.state(),
                target_rng: g.target_rng.state(),
            })
            .unwrap()
        };
        let registry = Arc::new(EffectRegistry::with_defaults());

        // The mirror layout is faithful: a full team loads
        let full = Game::load(&encode(3), Arc::clone(&registry)).unwrap();
        assert_eq!(full.state(), g.state());

        assert!(matches!(Game::load(&encode(2), registry), Err(GameError::Snapshot(_))));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = game(13);
        let mut b = game(13);

        for _ in 0..3 {
            a.roll_dice().unwrap();
            b.roll_dice().unwrap();
            a.next_round().unwrap();
            b.next_round().unwrap();
        }
        assert_eq!(a.state(), b.state());
    }
}
