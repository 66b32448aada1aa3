//! Priority-ordered effect queue.
//!
//! Entries leave the queue by descending priority. Entries with equal
//! priority leave in the order they were pushed, so resolution order is
//! total and reproducible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameState, Result};
use crate::effects::{EffectRegistry, EffectResolver, PendingEffect};

/// Unique, monotonically increasing identifier for a queue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueueEntryId(pub u32);

impl QueueEntryId {
    /// Create a new entry ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QueueEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "QueueEntry({})", self.0)
    }
}

/// An entry in the queue.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueuedEffect {
    /// Push order; breaks priority ties.
    pub id: QueueEntryId,

    /// The effect to resolve.
    pub effect: PendingEffect,
}

impl Ord for QueuedEffect {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: higher priority first, then lower id first
        self.effect
            .priority
            .cmp(&other.effect.priority)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for QueuedEffect {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedEffect {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedEffect {}

/// Worklist of effects for one round.
///
/// 1. `add_all_effects` fills the queue from a targeted state
/// 2. `unstack` drains it, applying each effect to the state
///
/// The queue is empty after `unstack`, so nothing carries over between
/// rounds.
#[derive(Clone, Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<QueuedEffect>,
    next_id: u32,
}

impl PriorityQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Peek at the next entry to resolve.
    #[must_use]
    pub fn peek(&self) -> Option<&QueuedEffect> {
        self.heap.peek()
    }

    /// Push one effect.
    pub fn push(&mut self, effect: PendingEffect) -> QueueEntryId {
        let id = QueueEntryId::new(self.next_id);
        self.next_id += 1;
        self.heap.push(QueuedEffect { id, effect });
        id
    }

    /// Remove the next entry to resolve.
    pub fn pop(&mut self) -> Option<QueuedEffect> {
        self.heap.pop()
    }

    /// Enqueue every effect shown by the living characters of `state`.
    ///
    /// Targeted effects need targets assigned first; otherwise this fails
    /// with `MissingTarget` and the queue is left unchanged.
    ///
    /// Returns the number of entries added.
    pub fn add_all_effects(&mut self, state: &GameState, registry: &EffectRegistry) -> Result<usize> {
        let pending = EffectResolver::collect(state, registry)?;
        let count = pending.len();
        for effect in pending {
            self.push(effect);
        }
        debug!(count, round = state.current_round, "effects queued");
        Ok(count)
    }

    /// Drain the queue in priority order, applying every entry to `state`.
    #[must_use]
    pub fn unstack(&mut self, mut state: GameState) -> GameState {
        while let Some(entry) = self.pop() {
            EffectResolver::resolve_single(&mut state, &entry.effect);
        }
        state
    }

    /// Entries in the order `unstack` would resolve them.
    #[must_use]
    pub fn resolution_order(&self) -> Vec<&QueuedEffect> {
        let mut entries: Vec<_> = self.heap.iter().collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

/// Queue and resolve every effect of a targeted state in one step.
pub fn resolve_effects(state: GameState, registry: &EffectRegistry) -> Result<GameState> {
    let mut queue = PriorityQueue::new();
    queue.add_all_effects(&state, registry)?;
    Ok(queue.unstack(state))
}
