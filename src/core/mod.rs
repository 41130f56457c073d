//! Core value types: colors, bottles, RNG.
//!
//! These are the building blocks the rest of the engine is written in terms
//! of. Nothing here knows about levels, pours, or sessions.

pub mod bottle;
pub mod color;
pub mod rng;

pub use bottle::{Bottle, BottleId, BOTTLE_CAPACITY};
pub use color::Color;
pub use rng::{GameRng, GameRngState};
