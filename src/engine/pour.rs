//! The pour rules.
//!
//! A pour moves the source bottle's top run of same-colored layers onto the
//! target, as many as fit. Legality and transfer size are computed before
//! any layer moves, so a pour either fully happens or leaves both bottles
//! untouched.
//!
//! ## Rules
//!
//! In order: an empty source cannot pour, a full target cannot receive, an
//! empty target accepts anything, otherwise the top colors must match.
//!
//! ## Usage
//!
//! ```
//! use water_sort::core::{Bottle, BottleId, Color};
//! use water_sort::engine::pour;
//!
//! let mut source = Bottle::with_layers(BottleId::new(0), [Color::RED, Color::BLUE]);
//! let mut target = Bottle::new(BottleId::new(1));
//!
//! let result = pour(&mut source, &mut target).unwrap();
//! assert_eq!(result.transferred, 1);
//! assert_eq!(result.color, Color::BLUE);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Bottle, BottleId, Color};

/// Why a pour is refused.
///
/// A refusal is a normal gameplay outcome (the "that doesn't fit" cue),
/// not a fault. Both bottles are untouched when one of these comes back.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PourDenied {
    #[error("Source bottle is empty")]
    SourceEmpty,

    #[error("Target bottle is full")]
    TargetFull,

    #[error("Cannot pour {poured} onto {resting}")]
    ColorMismatch { poured: Color, resting: Color },
}

/// What a completed pour did. This is the fact the presentation layer
/// replays as animation and sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PourResult {
    /// Bottle the liquid left.
    pub source: BottleId,
    /// Bottle the liquid entered.
    pub target: BottleId,
    /// Color of every transferred layer.
    pub color: Color,
    /// How many layers moved. At least 1 for any allowed pour.
    pub transferred: usize,
}

/// The color and layer count a pour would move, or why it is refused.
///
/// Single source of truth for the rules. Computed entirely from reads.
fn transfer_plan(source: &Bottle, target: &Bottle) -> Result<(Color, usize), PourDenied> {
    let Some(poured) = source.top() else {
        return Err(PourDenied::SourceEmpty);
    };
    if target.is_full() {
        return Err(PourDenied::TargetFull);
    }
    if let Some(resting) = target.top() {
        if resting != poured {
            return Err(PourDenied::ColorMismatch { poured, resting });
        }
    }
    Ok((poured, source.top_run_len().min(target.free_space())))
}

/// Why pouring `source` into `target` would be refused, if it would be.
#[must_use]
pub fn deny_reason(source: &Bottle, target: &Bottle) -> Option<PourDenied> {
    transfer_plan(source, target).err()
}

/// Would a pour from `source` into `target` be allowed?
#[must_use]
pub fn can_pour(source: &Bottle, target: &Bottle) -> bool {
    transfer_plan(source, target).is_ok()
}

/// Pour from `source` into `target`.
///
/// Moves `min(top run length, target free space)` layers; the transfer
/// count and color are fixed before the first layer moves. On refusal
/// neither bottle changes.
pub fn pour(source: &mut Bottle, target: &mut Bottle) -> Result<PourResult, PourDenied> {
    let (color, transferred) = transfer_plan(source, target)?;

    for _ in 0..transferred {
        source.pop_top();
        target.push_top(color);
    }

    Ok(PourResult {
        source: source.id(),
        target: target.id(),
        color,
        transferred,
    })
}

/// True when every bottle is empty or full of a single color.
#[must_use]
pub fn is_level_complete(bottles: &[Bottle]) -> bool {
    bottles.iter().all(Bottle::is_complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bottle(id: u16, layers: impl IntoIterator<Item = Color>) -> Bottle {
        Bottle::with_layers(BottleId::new(id), layers)
    }

    #[test]
    fn test_pour_single_layer_into_empty() {
        let mut source = bottle(0, [Color::RED, Color::RED, Color::BLUE]);
        let mut target = Bottle::new(BottleId::new(1));

        let result = pour(&mut source, &mut target).unwrap();

        assert_eq!(result.transferred, 1);
        assert_eq!(result.color, Color::BLUE);
        assert_eq!(source.layers(), &[Color::RED, Color::RED]);
        assert_eq!(target.layers(), &[Color::BLUE]);
    }

    #[test]
    fn test_pour_full_run_into_empty() {
        let mut source = bottle(0, [Color::RED, Color::RED, Color::RED, Color::RED]);
        let mut target = Bottle::new(BottleId::new(1));

        let result = pour(&mut source, &mut target).unwrap();

        assert_eq!(result.transferred, 4);
        assert!(source.is_empty());
        assert!(target.is_full());
    }

    #[test]
    fn test_pour_merges_matching_tops() {
        let mut source = bottle(0, [Color::GREEN, Color::GREEN]);
        let mut target = bottle(1, [Color::GREEN, Color::GREEN]);

        let result = pour(&mut source, &mut target).unwrap();

        assert_eq!(result.transferred, 2);
        assert!(source.is_empty());
        assert!(target.is_full());
        assert!(target.is_complete());
    }

    #[test]
    fn test_pour_truncated_by_free_space() {
        let mut source = bottle(0, [Color::BLUE, Color::YELLOW, Color::YELLOW, Color::YELLOW]);
        let mut target = bottle(1, [Color::YELLOW, Color::YELLOW, Color::YELLOW]);

        let result = pour(&mut source, &mut target).unwrap();

        assert_eq!(result.transferred, 1);
        assert_eq!(source.layers(), &[Color::BLUE, Color::YELLOW, Color::YELLOW]);
        assert!(target.is_full());
    }

    #[test]
    fn test_empty_source_denied() {
        let mut source = Bottle::new(BottleId::new(0));
        let mut target = bottle(1, [Color::RED]);

        assert_eq!(pour(&mut source, &mut target), Err(PourDenied::SourceEmpty));
        assert_eq!(target.layers(), &[Color::RED]);
    }

    #[test]
    fn test_full_target_denied() {
        let mut source = bottle(0, [Color::RED]);
        let mut target = bottle(1, [Color::RED, Color::RED, Color::RED, Color::RED]);

        assert_eq!(pour(&mut source, &mut target), Err(PourDenied::TargetFull));
        assert_eq!(source.layers(), &[Color::RED]);
    }

    #[test]
    fn test_color_mismatch_denied() {
        let mut source = bottle(0, [Color::RED]);
        let mut target = bottle(1, [Color::BLUE]);

        assert_eq!(
            pour(&mut source, &mut target),
            Err(PourDenied::ColorMismatch {
                poured: Color::RED,
                resting: Color::BLUE,
            })
        );
        assert_eq!(source.layers(), &[Color::RED]);
        assert_eq!(target.layers(), &[Color::BLUE]);
    }

    #[test]
    fn test_empty_source_checked_before_full_target() {
        let source = Bottle::new(BottleId::new(0));
        let target = bottle(1, [Color::RED, Color::RED, Color::RED, Color::RED]);

        assert_eq!(deny_reason(&source, &target), Some(PourDenied::SourceEmpty));
    }

    #[test]
    fn test_can_pour_matches_deny_reason() {
        let cases = [
            (Bottle::new(BottleId::new(0)), bottle(1, [Color::RED])),
            (bottle(0, [Color::RED]), Bottle::new(BottleId::new(1))),
            (bottle(0, [Color::RED]), bottle(1, [Color::BLUE])),
            (bottle(0, [Color::RED]), bottle(1, [Color::RED])),
        ];

        for (source, target) in &cases {
            assert_eq!(can_pour(source, target), deny_reason(source, target).is_none());
        }
    }

    #[test]
    fn test_level_complete() {
        let done = vec![
            Bottle::new(BottleId::new(0)),
            bottle(1, [Color::RED, Color::RED, Color::RED, Color::RED]),
            bottle(2, [Color::BLUE, Color::BLUE, Color::BLUE, Color::BLUE]),
        ];
        assert!(is_level_complete(&done));

        let mixed_full = vec![bottle(0, [Color::RED, Color::RED, Color::RED, Color::BLUE])];
        assert!(!is_level_complete(&mixed_full));

        // Uniform but split across two half-filled bottles
        let split = vec![
            bottle(0, [Color::RED, Color::RED]),
            bottle(1, [Color::RED, Color::RED]),
        ];
        assert!(!is_level_complete(&split));
    }
}
