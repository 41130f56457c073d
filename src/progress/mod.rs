//! Persisted player progress.
//!
//! The engine defines the record's shape and update rules; reading and
//! writing the actual storage stays outside the crate. The serialized form
//! uses camelCase field names, matching the saved-game records this scheme
//! comes from, so existing saves round-trip.
//!
//! Star ratings are stored, not computed: the presentation layer decides
//! how many stars a clear was worth and the record keeps the best.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A player's progress through a level catalog.
///
/// ## Usage
///
/// ```
/// use water_sort::progress::GameProgress;
///
/// let mut progress = GameProgress::new();
/// assert!(progress.is_unlocked(1));
/// assert!(!progress.is_unlocked(2));
///
/// progress.record_completion(1, 100);
/// assert!(progress.is_unlocked(2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgress {
    /// Highest unlocked level, 1-based.
    pub current_level: u32,

    /// Best star rating per completed level.
    pub stars: FxHashMap<u32, u8>,

    /// Levels completed at least once, in first-completion order.
    pub completed_levels: Vec<u32>,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            current_level: 1,
            stars: FxHashMap::default(),
            completed_levels: Vec::new(),
        }
    }
}

impl GameProgress {
    /// Fresh progress: level 1 unlocked, nothing completed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `level` was completed in a catalog whose last level is
    /// `last_level`.
    ///
    /// Marks the level completed (once) and advances the unlock frontier
    /// to the next level, capped at the end of the catalog. Replaying an
    /// old level never moves the frontier backwards.
    pub fn record_completion(&mut self, level: u32, last_level: u32) {
        if !self.completed_levels.contains(&level) {
            self.completed_levels.push(level);
        }

        let next = u32::min(level.saturating_add(1), last_level);
        self.current_level = u32::max(self.current_level, next);
    }

    /// Record a star rating for a level, keeping the best seen.
    pub fn record_stars(&mut self, level: u32, stars: u8) {
        let entry = self.stars.entry(level).or_insert(0);
        *entry = u8::max(*entry, stars);
    }

    /// The best star rating recorded for a level, 0 if none.
    #[must_use]
    pub fn stars_for(&self, level: u32) -> u8 {
        self.stars.get(&level).copied().unwrap_or(0)
    }

    /// Has this level ever been completed?
    #[must_use]
    pub fn is_completed(&self, level: u32) -> bool {
        self.completed_levels.contains(&level)
    }

    /// Is this level playable yet?
    #[must_use]
    pub fn is_unlocked(&self, level: u32) -> bool {
        level >= 1 && level <= self.current_level
    }
}
