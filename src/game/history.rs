//! Bounded undo history.

use im::Vector;

use crate::core::GameState;

/// Previous states, most recent last.
///
/// `im::Vector` shares structure between clones, so handing a copy of the
/// history to another owner is cheap.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vector<GameState>,
    limit: usize,
}

impl History {
    /// Create a history keeping at most `limit` snapshots.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: Vector::new(),
            limit,
        }
    }

    /// Record a state. The oldest snapshot is dropped past the limit.
    pub fn push(&mut self, state: GameState) {
        if self.limit == 0 {
            return;
        }
        self.snapshots.push_back(state);
        while self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
        }
    }

    /// Take the most recent snapshot.
    pub fn pop(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
