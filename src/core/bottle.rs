//! Bottles: fixed-capacity stacks of liquid layers.
//!
//! A bottle holds between 0 and [`BOTTLE_CAPACITY`] layers, stored bottom to
//! top (index 0 is the bottom, last index is the top). Everything gameplay
//! needs to ask of a bottle is a query here; mutation happens only through
//! the pour engine and undo restoration, so the capacity bound holds by
//! construction.
//!
//! ## Usage
//!
//! ```
//! use water_sort::core::{Bottle, BottleId, Color};
//!
//! let bottle = Bottle::with_layers(BottleId::new(0), [Color::RED, Color::RED, Color::BLUE]);
//!
//! assert_eq!(bottle.top(), Some(Color::BLUE));
//! assert_eq!(bottle.top_run_len(), 1);
//! assert_eq!(bottle.free_space(), 1);
//! assert!(!bottle.is_complete());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;

/// Maximum number of layers a bottle holds.
pub const BOTTLE_CAPACITY: usize = 4;

/// Unique identifier for a bottle within a level.
///
/// Ids are positional: bottle 0 is the first bottle of the deal, and ids
/// stay stable for the life of the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BottleId(pub u16);

impl BottleId {
    /// Create a new bottle ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the ID as a positional index into the level's bottle list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for BottleId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BottleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bottle({})", self.0)
    }
}

/// A single bottle: up to four colored layers, bottom to top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bottle {
    id: BottleId,
    /// Layers bottom to top. Never exceeds `BOTTLE_CAPACITY`.
    layers: SmallVec<[Color; BOTTLE_CAPACITY]>,
}

impl Bottle {
    /// Create an empty bottle.
    #[must_use]
    pub fn new(id: BottleId) -> Self {
        Self {
            id,
            layers: SmallVec::new(),
        }
    }

    /// Create a bottle pre-filled with the given layers, bottom first.
    ///
    /// Panics if more than `BOTTLE_CAPACITY` layers are given.
    #[must_use]
    pub fn with_layers(id: BottleId, layers: impl IntoIterator<Item = Color>) -> Self {
        let layers: SmallVec<[Color; BOTTLE_CAPACITY]> = layers.into_iter().collect();
        assert!(
            layers.len() <= BOTTLE_CAPACITY,
            "Bottle {} given {} layers, capacity is {}",
            id,
            layers.len(),
            BOTTLE_CAPACITY
        );
        Self { id, layers }
    }

    /// This bottle's ID.
    #[must_use]
    pub const fn id(&self) -> BottleId {
        self.id
    }

    /// The layers, bottom to top.
    #[must_use]
    pub fn layers(&self) -> &[Color] {
        &self.layers
    }

    /// Number of filled layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when no layers are filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// True when every slot is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.layers.len() == BOTTLE_CAPACITY
    }

    /// Number of unfilled slots.
    #[must_use]
    pub fn free_space(&self) -> usize {
        BOTTLE_CAPACITY - self.layers.len()
    }

    /// The topmost layer's color, or `None` when empty.
    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.layers.last().copied()
    }

    /// Length of the contiguous same-colored run at the top.
    ///
    /// Zero for an empty bottle. This is the amount a pour offers to move.
    #[must_use]
    pub fn top_run_len(&self) -> usize {
        let Some(top) = self.top() else {
            return 0;
        };
        self.layers.iter().rev().take_while(|&&c| c == top).count()
    }

    /// True when this bottle is in a winning configuration: empty, or
    /// full of a single color.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.layers.is_empty() {
            return true;
        }
        self.is_full() && self.layers.iter().all(|&c| c == self.layers[0])
    }

    /// Push a layer on top. Callers must have checked capacity.
    ///
    /// Panics if the bottle is full.
    pub(crate) fn push_top(&mut self, color: Color) {
        assert!(
            !self.is_full(),
            "Bottle {} is full, cannot push {}",
            self.id,
            color
        );
        self.layers.push(color);
    }

    /// Remove and return the top layer.
    pub(crate) fn pop_top(&mut self) -> Option<Color> {
        self.layers.pop()
    }

    /// Replace the contents wholesale. Used by undo restoration.
    ///
    /// Panics if more than `BOTTLE_CAPACITY` layers are given.
    pub(crate) fn restore_layers(&mut self, layers: &[Color]) {
        assert!(
            layers.len() <= BOTTLE_CAPACITY,
            "Bottle {} restored with {} layers, capacity is {}",
            self.id,
            layers.len(),
            BOTTLE_CAPACITY
        );
        self.layers.clear();
        self.layers.extend_from_slice(layers);
    }
}
