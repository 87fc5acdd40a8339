//! The roll engine: move validation, application, undo, scramble, reset

use crate::{Board, BoardConfig, Cell, Direction, MoveHistory, MoveRecord, Result};
use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of a roll attempt
///
/// A declined attempt leaves the board untouched; it is a reported outcome,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Whether the roll was applied
    pub applied: bool,
    /// Position of the empty slot after the attempt
    pub empty_cell: IVec2,
    /// Applied non-undo rolls since the last reset or scramble
    pub move_count: u32,
}

/// Owns one board plus its move history and drives all mutation
///
/// The engine is synchronous and single-threaded: each call runs to
/// completion and the resulting state is immediately observable. Concurrent
/// game sessions each own their own engine.
#[derive(Debug, Clone)]
pub struct RollEngine {
    board: Board,
    config: BoardConfig,
    history: MoveHistory,
    move_count: u32,
}

impl RollEngine {
    /// Build an engine over the canonical seed board for `config`
    pub fn new(config: BoardConfig) -> Result<Self> {
        let board = Board::new(&config)?;
        Ok(RollEngine {
            board,
            config,
            history: MoveHistory::new(),
            move_count: 0,
        })
    }

    /// The current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The construction-time configuration
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Applied non-undo rolls since the last reset or scramble
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Recorded rolls, oldest first
    pub fn history(&self) -> &[MoveRecord] {
        self.history.records()
    }

    /// Whether the board is currently solved
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Attempt to roll a cube one cell in `direction`
    ///
    /// With `anchor: Some(cell)` the cube at that cell rolls toward
    /// `direction` (mouse-style input). With `anchor: None` the cube on the
    /// opposite side of the empty slot rolls into it (keyboard-style input:
    /// `Up` rolls whichever cube sits below the empty slot upward).
    pub fn attempt_roll(&mut self, direction: Direction, anchor: Option<IVec2>) -> RollOutcome {
        self.roll(direction, anchor, true)
    }

    /// Roll the cube at `cube` toward the adjacent empty slot, if it has one
    pub fn roll_toward_empty(&mut self, cube: IVec2) -> RollOutcome {
        for direction in Direction::ALL {
            if cube + direction.offset() == self.board.empty_cell() {
                return self.attempt_roll(direction, Some(cube));
            }
        }
        tracing::trace!(%cube, "no empty neighbor, roll declined");
        self.declined()
    }

    /// Undo the most recent recorded roll
    ///
    /// Rolls the cube back where it came from without touching the move
    /// counter. Declined when the history is empty.
    pub fn undo(&mut self) -> RollOutcome {
        match self.history.pop() {
            Some(record) => self.roll(record.direction.opposite(), Some(record.cell), false),
            None => self.declined(),
        }
    }

    /// Rebuild the seed board and clear the history and move counter
    pub fn reset(&mut self) {
        self.board = Board::new(&self.config).expect("config was validated at construction");
        self.history.clear();
        self.move_count = 0;
        tracing::debug!("board reset");
    }

    /// Shuffle the board with `iterations` random legal rolls
    ///
    /// Each iteration rolls a uniformly chosen occupied neighbor into the
    /// empty slot, so the scrambled board is always solvable by replaying
    /// the returned records in reverse. Clears the history and move counter
    /// afterwards. Stops early only when no cube neighbors the empty slot.
    pub fn scramble<R: Rng + ?Sized>(
        &mut self,
        iterations: usize,
        rng: &mut R,
    ) -> Vec<MoveRecord> {
        let mut applied = Vec::with_capacity(iterations);
        for _ in 0..iterations {
            let empty = self.board.empty_cell();
            let candidates: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|direction| {
                    self.board
                        .get(empty - direction.offset())
                        .is_some_and(|cell| cell.is_occupied())
                })
                .collect();
            if candidates.is_empty() {
                break;
            }

            let direction = candidates[rng.random_range(0..candidates.len())];
            let outcome = self.roll(direction, None, false);
            debug_assert!(outcome.applied);
            applied.push(MoveRecord {
                direction,
                cell: empty,
            });
        }
        self.history.clear();
        self.move_count = 0;
        tracing::debug!(moves = applied.len(), "board scrambled");
        applied
    }

    /// [`scramble`](Self::scramble) with the thread-local generator
    pub fn scramble_default(&mut self, iterations: usize) -> Vec<MoveRecord> {
        self.scramble(iterations, &mut rand::rng())
    }

    fn declined(&self) -> RollOutcome {
        RollOutcome {
            applied: false,
            empty_cell: self.board.empty_cell(),
            move_count: self.move_count,
        }
    }

    fn roll(&mut self, direction: Direction, anchor: Option<IVec2>, record: bool) -> RollOutcome {
        let source = match anchor {
            Some(cell) => cell,
            None => self.board.empty_cell() - direction.offset(),
        };
        let target = source + direction.offset();

        let orientation = match self.board.get(source).and_then(Cell::orientation) {
            Some(o) => o,
            None => {
                tracing::trace!(?direction, %source, "source is not a cube, roll declined");
                return self.declined();
            }
        };
        if !self.board.get(target).is_some_and(|cell| cell.is_empty()) {
            tracing::trace!(?direction, %target, "target is not the empty slot, roll declined");
            return self.declined();
        }

        self.board
            .apply_roll(source, target, orientation.rolled(direction));
        if record {
            self.move_count += 1;
            self.history.push(MoveRecord {
                direction,
                cell: target,
            });
        }
        tracing::debug!(?direction, %source, %target, "cube rolled");
        RollOutcome {
            applied: true,
            empty_cell: source,
            move_count: self.move_count,
        }
    }
}
