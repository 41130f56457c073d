//! Level specifications and validation.
//!
//! A `LevelSpec` is the recipe for a deal: how many bottles, how many of
//! them start empty, which colors are in play, and how many layers of each
//! color exist. Validation enforces the slot arithmetic that makes a deal
//! well-formed; the generator refuses to run on a spec that fails it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Color, BOTTLE_CAPACITY};

/// Why a level spec cannot produce a deal.
///
/// These are authoring errors, not gameplay outcomes. A spec that fails
/// validation is rejected outright.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSpecError {
    #[error("Palette is empty")]
    EmptyPalette,

    #[error("Palette repeats {color}")]
    DuplicateColor { color: Color },

    #[error("Layers per color must be at least 1")]
    ZeroLayersPerColor,

    #[error("{empty} of {bottles} bottles empty leaves nothing to fill")]
    TooManyEmptyBottles { bottles: u16, empty: u16 },

    #[error("{filled} filled bottles provide {provided} slots, palette fills {required}")]
    SlotMismatch {
        filled: u16,
        provided: usize,
        required: usize,
    },
}

/// The recipe for one level's deal.
///
/// ## Usage
///
/// ```
/// use water_sort::level::LevelSpec;
/// use water_sort::core::Color;
///
/// // 4 bottles, 2 empty, 2 colors of 4 layers each
/// let spec = LevelSpec::new(4, 2, Color::palette(2));
/// assert!(spec.validate().is_ok());
/// assert_eq!(spec.total_layers(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    /// Total bottles in the level.
    pub bottle_count: u16,

    /// How many of them start empty.
    pub empty_bottle_count: u16,

    /// Colors in play. Must be duplicate-free.
    pub palette: Vec<Color>,

    /// Layers of each palette color in the deal.
    pub layers_per_color: u8,
}

impl LevelSpec {
    /// Create a spec with the standard four layers per color.
    #[must_use]
    pub fn new(bottle_count: u16, empty_bottle_count: u16, palette: Vec<Color>) -> Self {
        Self {
            bottle_count,
            empty_bottle_count,
            palette,
            layers_per_color: BOTTLE_CAPACITY as u8,
        }
    }

    /// Override the layers-per-color figure.
    #[must_use]
    pub fn with_layers_per_color(mut self, layers: u8) -> Self {
        self.layers_per_color = layers;
        self
    }

    /// Bottles that start with liquid in them.
    #[must_use]
    pub fn filled_bottle_count(&self) -> u16 {
        self.bottle_count.saturating_sub(self.empty_bottle_count)
    }

    /// Total liquid layers in the deal.
    #[must_use]
    pub fn total_layers(&self) -> usize {
        self.palette.len() * self.layers_per_color as usize
    }

    /// Check that this spec describes a well-formed deal.
    ///
    /// The filled bottles must hold exactly the palette's layers: every
    /// slot colored, no color left over.
    pub fn validate(&self) -> Result<(), InvalidSpecError> {
        if self.palette.is_empty() {
            return Err(InvalidSpecError::EmptyPalette);
        }

        let mut seen = FxHashSet::default();
        for &color in &self.palette {
            if !seen.insert(color) {
                return Err(InvalidSpecError::DuplicateColor { color });
            }
        }

        if self.layers_per_color == 0 {
            return Err(InvalidSpecError::ZeroLayersPerColor);
        }

        if self.empty_bottle_count >= self.bottle_count {
            return Err(InvalidSpecError::TooManyEmptyBottles {
                bottles: self.bottle_count,
                empty: self.empty_bottle_count,
            });
        }

        let filled = self.filled_bottle_count();
        let provided = filled as usize * BOTTLE_CAPACITY;
        let required = self.total_layers();
        if provided != required {
            return Err(InvalidSpecError::SlotMismatch {
                filled,
                provided,
                required,
            });
        }

        Ok(())
    }
}
