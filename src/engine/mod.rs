//! The pour rules engine.
//!
//! Pure functions over bottles. No session state, no randomness, no side
//! effects beyond the two bottles a pour touches.

pub mod pour;

pub use pour::{can_pour, deny_reason, is_level_complete, pour, PourDenied, PourResult};
