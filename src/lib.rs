//! # water-sort
//!
//! A liquid-sorting puzzle engine: bottles hold up to four colored layers,
//! and the player pours matching runs between bottles until every bottle is
//! empty or uniformly full.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Deals and hints are driven by a seeded RNG. The
//!    same catalog, seed, and call sequence always replay identically.
//!
//! 2. **Synchronous Core**: Every operation is instant and atomic. The
//!    engine emits facts (`PourResult`, `Move`, outcomes); animation,
//!    sound, and input pacing belong to the caller.
//!
//! 3. **Refusals Are Outcomes**: An illegal pour or a tap on an empty
//!    bottle is normal play, reported as data. Errors are reserved for
//!    contract violations and bad level specs.
//!
//! ## Modules
//!
//! - `core`: Colors, bottles, deterministic RNG
//! - `level`: Level specs, the standard 100-level catalog, deal generation
//! - `engine`: The pour rules
//! - `history`: Move records and the undo stack
//! - `session`: Game session state machine and orchestration
//! - `progress`: The persisted progress record

pub mod core;
pub mod engine;
pub mod history;
pub mod level;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Bottle, BottleId, Color, GameRng, GameRngState, BOTTLE_CAPACITY};

pub use crate::level::{
    InvalidSpecError, LevelCatalog, LevelGenerator, LevelSpec, STANDARD_LEVEL_COUNT,
};

pub use crate::engine::{can_pour, deny_reason, is_level_complete, pour, PourDenied, PourResult};

pub use crate::history::{Move, MoveHistory};

pub use crate::session::{GameSession, PourOutcome, SelectOutcome, SessionError, SessionPhase};

pub use crate::progress::GameProgress;
