//! The standard level catalog.
//!
//! One hundred levels built from deterministic difficulty bands. The first
//! fifteen are hand-tuned and keep their authored palettes; past that,
//! every few levels another color or bottle joins the board and palettes
//! are prefixes of the color roster. The empty-bottle count is always
//! derived as `bottles - colors` so the filled bottles hold the palette
//! exactly.
//!
//! The catalog holds recipes only. Dealing a level is the generator's job,
//! keyed by whatever seed the caller picks.

use serde::{Deserialize, Serialize};

use crate::core::Color;

use super::spec::LevelSpec;

/// Levels in the standard catalog.
pub const STANDARD_LEVEL_COUNT: u32 = 100;

/// Palette the opening levels draw from: level N's colors are the first
/// `colors` entries of this array, which introduces colors in the order
/// the hand-tuned levels were written, not roster order.
const OPENING_PALETTE: [Color; 9] = [
    Color::RED,
    Color::BLUE,
    Color::GREEN,
    Color::YELLOW,
    Color::PURPLE,
    Color::ORANGE,
    Color::PINK,
    Color::TEAL,
    Color::LIME,
];

/// Hand-tuned opening levels: (bottles, colors) for levels 1 to 15.
const OPENING_SHAPES: [(u16, usize); 15] = [
    (4, 2),
    (5, 3),
    (5, 3),
    (6, 4),
    (6, 4),
    (7, 5),
    (7, 5),
    (8, 6),
    (8, 6),
    (10, 7),
    (10, 7),
    (11, 8),
    (11, 8),
    (12, 9),
    (12, 9),
];

/// Board shape for a standard level: (bottles, colors).
fn standard_shape(level: u32) -> (u16, usize) {
    match level {
        1..=15 => OPENING_SHAPES[(level - 1) as usize],
        16..=30 => {
            let step = (level - 16) / 5;
            (12 + step as u16, 9 + step as usize)
        }
        31..=50 => (
            13 + ((level - 31) / 5) as u16,
            usize::min(10 + ((level - 31) / 7) as usize, 15),
        ),
        51..=70 => (
            15 + ((level - 51) / 5) as u16,
            usize::min(12 + ((level - 51) / 10) as usize, 16),
        ),
        71..=90 => (
            18 + ((level - 71) / 10) as u16,
            usize::min(14 + ((level - 71) / 10) as usize, 18),
        ),
        _ => (20, usize::min(16 + ((level - 91) / 5) as usize, 19)),
    }
}

/// Assemble a standard level's spec from its shape and palette.
fn standard_spec(level: u32) -> LevelSpec {
    let (bottles, colors) = standard_shape(level);
    let palette = match level {
        1..=15 => OPENING_PALETTE[..colors].to_vec(),
        _ => Color::palette(colors),
    };
    LevelSpec::new(bottles, bottles - colors as u16, palette)
}

/// An ordered collection of level specs, addressed by 1-based level number.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelCatalog {
    specs: Vec<LevelSpec>,
}

impl LevelCatalog {
    /// The standard 100-level catalog.
    #[must_use]
    pub fn standard() -> Self {
        let specs = (1..=STANDARD_LEVEL_COUNT).map(standard_spec).collect();
        Self { specs }
    }

    /// A catalog from caller-provided specs, ordered as given.
    #[must_use]
    pub fn custom(specs: Vec<LevelSpec>) -> Self {
        Self { specs }
    }

    /// Look up a level's spec. Level numbers are 1-based.
    #[must_use]
    pub fn get(&self, level: u32) -> Option<&LevelSpec> {
        if level == 0 {
            return None;
        }
        self.specs.get((level - 1) as usize)
    }

    /// Number of levels in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True when the catalog holds no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Highest level number, 0 for an empty catalog.
    #[must_use]
    pub fn last_level(&self) -> u32 {
        self.specs.len() as u32
    }

    /// Iterate specs in level order.
    pub fn iter(&self) -> impl Iterator<Item = &LevelSpec> {
        self.specs.iter()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
