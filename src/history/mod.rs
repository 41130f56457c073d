//! Move records and the undo history.
//!
//! Every successful pour is recorded with full before-snapshots of the two
//! bottles it touched, so undo is a restore, not a reverse-pour (a reverse
//! pour could merge runs and lose the original split). History is strictly
//! LIFO and there is no redo: a pour after an undo simply starts a new
//! forward line.
//!
//! Backed by `im::Vector`, so cloning a history (for session snapshots) is
//! O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BottleId, Color, BOTTLE_CAPACITY};
use crate::engine::PourResult;

/// One completed pour, with enough context to undo it exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Bottle the liquid left.
    pub source: BottleId,

    /// Bottle the liquid entered.
    pub target: BottleId,

    /// Color of the transferred run.
    pub color: Color,

    /// How many layers moved.
    pub transferred: usize,

    /// Source layers before the pour, bottom to top.
    pub source_before: SmallVec<[Color; BOTTLE_CAPACITY]>,

    /// Target layers before the pour, bottom to top.
    pub target_before: SmallVec<[Color; BOTTLE_CAPACITY]>,
}

impl Move {
    /// Build a move record from a pour's result and the pre-pour layers.
    #[must_use]
    pub fn from_pour(result: &PourResult, source_before: &[Color], target_before: &[Color]) -> Self {
        Self {
            source: result.source,
            target: result.target,
            color: result.color,
            transferred: result.transferred,
            source_before: SmallVec::from_slice(source_before),
            target_before: SmallVec::from_slice(target_before),
        }
    }
}

/// LIFO history of completed pours for the current level.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vector<Move>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed pour.
    pub fn record(&mut self, m: Move) {
        self.moves.push_back(m);
    }

    /// Remove and return the most recent move.
    ///
    /// `None` when there is nothing to undo.
    pub fn undo_last(&mut self) -> Option<Move> {
        self.moves.pop_back()
    }

    /// Peek at the most recent move without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True when there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Forget all recorded moves. Called on every level start.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Iterate moves oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
