//! Session orchestration: one player working through a catalog of levels.
//!
//! `GameSession` owns the board, the selection state, the undo history,
//! and the session RNG. Every operation completes synchronously and either
//! fully applies or leaves the session untouched, so callers can treat each
//! call as atomic. Animation pacing, input locking, and replay queues are
//! presentation concerns and live outside this crate; the session assumes
//! one caller issuing one operation at a time.
//!
//! ## Lifecycle
//!
//! Sessions move `Idle -> Active -> Won` and back to `Active` only by
//! starting (or resetting to) a level. Gameplay calls outside `Active` are
//! contract violations, reported as [`SessionError::NotActive`].
//!
//! ## Selection
//!
//! The two-tap flow mirrors how these puzzles play: the first tap picks a
//! source, the second either deselects it, pours into a different bottle,
//! or (tapping an empty bottle with nothing picked) earns a refusal cue.
//! Whatever the second tap does, the selection is consumed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::core::{Bottle, BottleId, Color, GameRng, BOTTLE_CAPACITY};
use crate::engine::{self, PourDenied, PourResult};
use crate::history::{Move, MoveHistory};
use crate::level::{InvalidSpecError, LevelCatalog, LevelGenerator};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No level loaded yet.
    Idle,
    /// A level is in play.
    Active,
    /// The current level is solved.
    Won,
}

/// Contract violations: calls the session's current state does not admit.
///
/// These fail fast with no partial mutation. Rules refusals are not errors;
/// they come back inside [`PourOutcome::Denied`] and [`SelectOutcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No level is active")]
    NotActive,

    #[error("Level {0} is not in the catalog")]
    UnknownLevel(u32),

    #[error("{0} is not a bottle in this level")]
    UnknownBottle(BottleId),

    #[error("Source and target are both {0}")]
    SourceIsTarget(BottleId),

    #[error("No moves to undo")]
    EmptyHistory,

    #[error(transparent)]
    Spec(#[from] InvalidSpecError),
}

/// What an attempted pour did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PourOutcome {
    /// The pour happened. `won` is true when it solved the level.
    Poured { result: PourResult, won: bool },

    /// The rules refused it; nothing changed.
    Denied {
        source: BottleId,
        target: BottleId,
        reason: PourDenied,
    },
}

/// What tapping a bottle did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The bottle is now the pending pour source.
    Selected(BottleId),

    /// The pending source was tapped again and released.
    Deselected(BottleId),

    /// An empty bottle was tapped with nothing selected: refusal cue.
    Rejected(BottleId),

    /// A source was pending, so this tap attempted a pour into it.
    Pour(PourOutcome),
}

/// One player's session over a level catalog.
///
/// ## Usage
///
/// ```
/// use water_sort::session::{GameSession, SessionPhase};
///
/// let mut session = GameSession::standard(42);
/// session.start_level(1).unwrap();
///
/// assert_eq!(session.phase(), SessionPhase::Active);
/// assert_eq!(session.bottles().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    catalog: LevelCatalog,
    rng: GameRng,
    phase: SessionPhase,
    current_level: Option<u32>,
    bottles: Vec<Bottle>,
    selected: Option<BottleId>,
    history: MoveHistory,
    move_count: u32,
}

impl GameSession {
    /// Create an idle session over the given catalog.
    ///
    /// The seed fixes every deal and hint this session will ever make:
    /// two sessions with the same catalog, seed, and call sequence stay
    /// identical.
    #[must_use]
    pub fn new(catalog: LevelCatalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: GameRng::new(seed),
            phase: SessionPhase::Idle,
            current_level: None,
            bottles: Vec::new(),
            selected: None,
            history: MoveHistory::new(),
            move_count: 0,
        }
    }

    /// Create an idle session over the standard 100-level catalog.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::new(LevelCatalog::standard(), seed)
    }

    // === Lifecycle ===

    /// Deal and enter a level. Level numbers are 1-based.
    ///
    /// Clears the history, selection, and move counter. On failure the
    /// session is unchanged.
    #[instrument(skip(self))]
    pub fn start_level(&mut self, level: u32) -> Result<(), SessionError> {
        let spec = self
            .catalog
            .get(level)
            .ok_or(SessionError::UnknownLevel(level))?;

        let bottles = LevelGenerator::generate(spec, &mut self.rng)?;

        self.bottles = bottles;
        self.current_level = Some(level);
        self.selected = None;
        self.history.clear();
        self.move_count = 0;
        self.phase = SessionPhase::Active;

        debug!(level, bottles = self.bottles.len(), "level started");
        Ok(())
    }

    /// Restart the current level with a fresh deal.
    ///
    /// Re-runs the generator from the session RNG, so the new board is
    /// an independent shuffle of the same spec. Allowed while playing or
    /// after winning; a session with no level loaded has nothing to
    /// reset.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let level = self.current_level.ok_or(SessionError::NotActive)?;
        self.start_level(level)
    }

    // === Gameplay ===

    /// Tap a bottle, advancing the selection machine.
    #[instrument(skip(self))]
    pub fn select_bottle(&mut self, id: BottleId) -> Result<SelectOutcome, SessionError> {
        self.require_active()?;
        self.require_bottle(id)?;

        match self.selected {
            None => {
                if self.bottle_ref(id).is_empty() {
                    Ok(SelectOutcome::Rejected(id))
                } else {
                    self.selected = Some(id);
                    Ok(SelectOutcome::Selected(id))
                }
            }
            Some(selected) if selected == id => {
                self.selected = None;
                Ok(SelectOutcome::Deselected(id))
            }
            Some(selected) => {
                // The pending selection is consumed whatever happens next.
                let outcome = self.attempt_pour(selected, id)?;
                Ok(SelectOutcome::Pour(outcome))
            }
        }
    }

    /// Attempt to pour one bottle into another.
    ///
    /// A rules refusal is a normal outcome ([`PourOutcome::Denied`]), with
    /// both bottles untouched. A successful pour is recorded in the history
    /// and checked for the win.
    #[instrument(skip(self))]
    pub fn attempt_pour(
        &mut self,
        source: BottleId,
        target: BottleId,
    ) -> Result<PourOutcome, SessionError> {
        self.require_active()?;
        self.require_bottle(source)?;
        self.require_bottle(target)?;
        if source == target {
            return Err(SessionError::SourceIsTarget(source));
        }

        // Any pour attempt consumes a pending selection.
        self.selected = None;

        let source_before: SmallVec<[Color; BOTTLE_CAPACITY]> =
            SmallVec::from_slice(self.bottle_ref(source).layers());
        let target_before: SmallVec<[Color; BOTTLE_CAPACITY]> =
            SmallVec::from_slice(self.bottle_ref(target).layers());

        let (source_bottle, target_bottle) = self.bottle_pair_mut(source, target);
        let result = match engine::pour(source_bottle, target_bottle) {
            Ok(result) => result,
            Err(reason) => {
                debug!(%source, %target, %reason, "pour denied");
                return Ok(PourOutcome::Denied {
                    source,
                    target,
                    reason,
                });
            }
        };

        self.history
            .record(Move::from_pour(&result, &source_before, &target_before));
        self.move_count += 1;

        let won = engine::is_level_complete(&self.bottles);
        if won {
            self.phase = SessionPhase::Won;
            info!(
                level = self.current_level,
                moves = self.move_count,
                "level complete"
            );
        } else {
            debug!(%source, %target, transferred = result.transferred, "poured");
        }

        Ok(PourOutcome::Poured { result, won })
    }

    /// Undo the most recent pour, restoring both bottles exactly.
    ///
    /// Returns the undone move so the caller can re-render from it. The
    /// move counter is not decremented; undo costs the attempt. Refused
    /// outside `Active` and when the history is empty.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, SessionError> {
        self.require_active()?;

        let m = self.history.undo_last().ok_or(SessionError::EmptyHistory)?;

        self.bottles[m.source.index()].restore_layers(&m.source_before);
        self.bottles[m.target.index()].restore_layers(&m.target_before);
        self.selected = None;

        debug!(source = %m.source, target = %m.target, "move undone");
        Ok(m)
    }

    // === Assists ===

    /// Every (source, target) pair the rules would currently allow.
    ///
    /// Empty outside `Active`.
    #[must_use]
    pub fn legal_pours(&self) -> Vec<(BottleId, BottleId)> {
        if self.phase != SessionPhase::Active {
            return Vec::new();
        }

        let mut pours = Vec::new();
        for source in &self.bottles {
            for target in &self.bottles {
                if source.id() != target.id() && engine::can_pour(source, target) {
                    pours.push((source.id(), target.id()));
                }
            }
        }
        pours
    }

    /// Suggest a random legal pour, or `None` when stuck.
    pub fn hint(&mut self) -> Option<(BottleId, BottleId)> {
        let pours = self.legal_pours();
        self.rng.choose(&pours).copied()
    }

    // === Queries ===

    /// The current board, indexed by bottle ID.
    #[must_use]
    pub fn bottles(&self) -> &[Bottle] {
        &self.bottles
    }

    /// Look up one bottle.
    #[must_use]
    pub fn bottle(&self, id: BottleId) -> Option<&Bottle> {
        self.bottles.get(id.index())
    }

    /// The session's lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The level currently loaded, if any. Survives into `Won`.
    #[must_use]
    pub fn current_level(&self) -> Option<u32> {
        self.current_level
    }

    /// The pending pour source, if a bottle is selected.
    #[must_use]
    pub fn selected_bottle(&self) -> Option<BottleId> {
        self.selected
    }

    /// Successful pours since the level started. Undo does not refund.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Moves currently available to undo.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The recorded moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Would an undo call succeed right now?
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.phase == SessionPhase::Active && !self.history.is_empty()
    }

    /// Is the board in a winning configuration?
    ///
    /// Meaningful once a level is loaded; tracks what `attempt_pour` uses
    /// to decide the `Won` transition.
    #[must_use]
    pub fn is_level_complete(&self) -> bool {
        engine::is_level_complete(&self.bottles)
    }

    /// The catalog this session plays from.
    #[must_use]
    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    // === Internals ===

    fn require_active(&self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Active {
            Ok(())
        } else {
            Err(SessionError::NotActive)
        }
    }

    fn require_bottle(&self, id: BottleId) -> Result<(), SessionError> {
        if id.index() < self.bottles.len() {
            Ok(())
        } else {
            Err(SessionError::UnknownBottle(id))
        }
    }

    /// Panics if `id` is out of range; callers validate first.
    fn bottle_ref(&self, id: BottleId) -> &Bottle {
        &self.bottles[id.index()]
    }

    /// Mutable access to two distinct bottles at once.
    fn bottle_pair_mut(&mut self, a: BottleId, b: BottleId) -> (&mut Bottle, &mut Bottle) {
        let (i, j) = (a.index(), b.index());
        debug_assert_ne!(i, j);

        if i < j {
            let (left, right) = self.bottles.split_at_mut(j);
            (&mut left[i], &mut right[0])
        } else {
            let (left, right) = self.bottles.split_at_mut(i);
            (&mut right[0], &mut left[j])
        }
    }
}
