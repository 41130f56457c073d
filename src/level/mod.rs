//! Level recipes, the standard catalog, and deal generation.

pub mod catalog;
pub mod generator;
pub mod spec;

pub use catalog::{LevelCatalog, STANDARD_LEVEL_COUNT};
pub use generator::LevelGenerator;
pub use spec::{InvalidSpecError, LevelSpec};
