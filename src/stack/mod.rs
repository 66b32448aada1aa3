//! Round resolution.
//!
//! All effects shown on the board at the end of a round are gathered into
//! a [`PriorityQueue`] and resolved highest priority first. Shields and
//! heals (high priority) land before attacks, so a character that blocks
//! this round is protected from this round's hits.
//!
//! ## Example Usage
//!
//! ```
//! use goodlock::core::GameRng;
//! use goodlock::effects::EffectRegistry;
//! use goodlock::game::Game;
//! use goodlock::players::assign_targets;
//! use goodlock::stack::PriorityQueue;
//! use goodlock::GameConfig;
//!
//! let registry = EffectRegistry::with_defaults();
//! let game = Game::new(GameConfig::new().with_seed(1), registry.into()).unwrap();
//!
//! let targeted = assign_targets(game.state(), &mut GameRng::new(1)).unwrap();
//!
//! let mut queue = PriorityQueue::new();
//! queue.add_all_effects(&targeted, game.registry()).unwrap();
//! let resolved = queue.unstack(targeted);
//!
//! assert!(queue.is_empty());
//! assert_eq!(resolved.current_round, 1);
//! ```

mod priority;

pub use priority::{resolve_effects, PriorityQueue, QueueEntryId, QueuedEffect};
