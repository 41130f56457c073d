//! Liquid color tokens.
//!
//! A `Color` is an opaque identity: the engine only ever asks whether two
//! layers hold the same color. The named roster mirrors the standard level
//! palette, and each entry carries a display swatch (`hex`) that the
//! presentation layer may use but the engine never inspects.
//!
//! ## Usage
//!
//! ```
//! use water_sort::core::Color;
//!
//! assert_eq!(Color::RED, Color::RED);
//! assert_ne!(Color::RED, Color::BLUE);
//!
//! // Palettes are prefixes of the roster, in difficulty order
//! let palette = Color::palette(3);
//! assert_eq!(palette, vec![Color::RED, Color::ORANGE, Color::YELLOW]);
//! ```

use serde::{Deserialize, Serialize};

/// Opaque color token for a single liquid layer.
///
/// Colors compare by identity only; there is no ordering between them.
/// The raw value indexes the standard roster for the named constants,
/// but any `u8` is a valid color in custom level specs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    pub const RED: Color = Color(0);
    pub const ORANGE: Color = Color(1);
    pub const YELLOW: Color = Color(2);
    pub const GREEN: Color = Color(3);
    pub const BLUE: Color = Color(4);
    pub const PURPLE: Color = Color(5);
    pub const PINK: Color = Color(6);
    pub const TEAL: Color = Color(7);
    pub const LIME: Color = Color(8);
    pub const BROWN: Color = Color(9);
    pub const GRAY: Color = Color(10);
    pub const NAVY: Color = Color(11);
    pub const INDIGO: Color = Color(12);
    pub const CYAN: Color = Color(13);
    pub const AMBER: Color = Color(14);
    pub const DEEP_ORANGE: Color = Color(15);
    pub const LIGHT_GREEN: Color = Color(16);
    pub const DEEP_PURPLE: Color = Color(17);
    pub const LIGHT_BLUE: Color = Color(18);

    /// The standard roster, in the order levels draw from it.
    pub const ROSTER: [Color; 19] = [
        Color::RED,
        Color::ORANGE,
        Color::YELLOW,
        Color::GREEN,
        Color::BLUE,
        Color::PURPLE,
        Color::PINK,
        Color::TEAL,
        Color::LIME,
        Color::BROWN,
        Color::GRAY,
        Color::NAVY,
        Color::INDIGO,
        Color::CYAN,
        Color::AMBER,
        Color::DEEP_ORANGE,
        Color::LIGHT_GREEN,
        Color::DEEP_PURPLE,
        Color::LIGHT_BLUE,
    ];

    /// Create a color from its raw value.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw color value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The first `count` roster colors, in roster order.
    ///
    /// This is how the standard catalog builds level palettes.
    /// Panics if `count` exceeds the roster size.
    #[must_use]
    pub fn palette(count: usize) -> Vec<Color> {
        assert!(
            count <= Self::ROSTER.len(),
            "Palette of {} colors requested, roster has {}",
            count,
            Self::ROSTER.len()
        );
        Self::ROSTER[..count].to_vec()
    }

    /// Iterate over the full standard roster.
    pub fn all() -> impl Iterator<Item = Color> {
        Self::ROSTER.into_iter()
    }

    /// Human-readable name for roster colors, `"custom"` otherwise.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "red",
            1 => "orange",
            2 => "yellow",
            3 => "green",
            4 => "blue",
            5 => "purple",
            6 => "pink",
            7 => "teal",
            8 => "lime",
            9 => "brown",
            10 => "gray",
            11 => "navy",
            12 => "indigo",
            13 => "cyan",
            14 => "amber",
            15 => "deep orange",
            16 => "light green",
            17 => "deep purple",
            18 => "light blue",
            _ => "custom",
        }
    }

    /// Display swatch for roster colors, `None` otherwise.
    ///
    /// Pure presentation data. The engine compares token identity, never
    /// the swatch, so two distinct colors never share a hex value.
    #[must_use]
    pub const fn hex(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("#FF5252"),
            1 => Some("#FF9800"),
            2 => Some("#FFEB3B"),
            3 => Some("#4CAF50"),
            4 => Some("#2196F3"),
            5 => Some("#9C27B0"),
            6 => Some("#FF4081"),
            7 => Some("#00BCD4"),
            8 => Some("#CDDC39"),
            9 => Some("#795548"),
            10 => Some("#9E9E9E"),
            11 => Some("#3F51B5"),
            12 => Some("#673AB7"),
            13 => Some("#00E5FF"),
            14 => Some("#FFC107"),
            15 => Some("#FF5722"),
            16 => Some("#8BC34A"),
            17 => Some("#512DA8"),
            18 => Some("#03A9F4"),
            _ => None,
        }
    }
}

impl From<u8> for Color {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
