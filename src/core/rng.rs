//! Seeded randomness for dice and targeting.
//!
//! One seed drives a game. Dice rolls and target picks draw from separate
//! ChaCha8 streams of that seed, so an extra roll never changes which
//! targets are picked later.
//!
//! ```
//! use goodlock::core::{GameRng, RngStream};
//!
//! let mut dice = GameRng::new(42).split(RngStream::Dice);
//! let mut again = GameRng::new(42).split(RngStream::Dice);
//!
//! assert_eq!(dice.roll_index(6), again.roll_index(6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::position::{CharacterIndex, PlayerIndex, Position, TEAM_SIZE};

/// Independent ChaCha8 streams of one seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RngStream {
    Root,
    Dice,
    Targets,
}

impl RngStream {
    const fn id(self) -> u64 {
        match self {
            RngStream::Root => 0,
            RngStream::Dice => 1,
            RngStream::Targets => 2,
        }
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    stream: RngStream,
}

impl GameRng {
    /// Root stream of `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_stream(seed, RngStream::Root)
    }

    /// Root stream of a seed drawn from OS entropy.
    ///
    /// Read the seed back with [`GameRng::seed`] to replay the game.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    fn with_stream(seed: u64, stream: RngStream) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(seed);
        inner.set_stream(stream.id());
        Self { inner, seed, stream }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn stream(&self) -> RngStream {
        self.stream
    }

    /// Fresh generator for another stream of the same seed.
    #[must_use]
    pub fn split(&self, stream: RngStream) -> Self {
        Self::with_stream(self.seed, stream)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn roll_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Pick a uniformly random slot on `player`'s team.
    pub fn roll_random_position(&mut self, player: PlayerIndex) -> Position {
        Position::new(player, CharacterIndex::SLOTS[self.roll_index(TEAM_SIZE)])
    }

    /// Capture the stream position for a save game.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            stream: self.stream,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream captured with [`GameRng::state`].
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut rng = Self::with_stream(state.seed, state.stream);
        rng.inner.set_word_pos(state.word_pos);
        rng
    }
}

/// Saved position of a [`GameRng`].
///
/// The ChaCha8 word position is a plain counter, so restoring costs the
/// same however many numbers were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub stream: RngStream,
    pub word_pos: u128,
}
