//! Rollcube - sliding-cube puzzle engine
//!
//! A grid of colored cubes with one open slot: a move tips an adjacent cube
//! over its edge into the slot, permuting the cube's visible faces like a
//! physical die. This crate owns the board state and the rolling rules; the
//! window, input, and drawing layers live in separate crates and only call
//! in with discrete move requests, then read the board back to render.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                     RollEngine                         │
//! ├───────────────────────────────────────────────────────┤
//! │  Moves                                                 │
//! │  ├── attempt_roll - validate and apply one roll        │
//! │  ├── undo - pop the log, roll the cube back            │
//! │  └── scramble / reset - shuffle or reseed the board    │
//! ├───────────────────────────────────────────────────────┤
//! │  Board                                                 │
//! │  ├── Cell grid - Empty / Blocked / Occupied            │
//! │  ├── Tile numbers - 1..N bookkeeping grid              │
//! │  └── Solved check                                      │
//! ├───────────────────────────────────────────────────────┤
//! │  Orientation                                           │
//! │  ├── FaceColor wheel - six colors, fixed complements   │
//! │  └── side_faces / rolled - the 90 degree tip rule      │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use rollcube::{BoardConfig, Direction, RollEngine};
//!
//! let mut engine = RollEngine::new(BoardConfig::default()).unwrap();
//!
//! // Keyboard-style: roll whichever cube sits below the empty slot upward.
//! let outcome = engine.attempt_roll(Direction::Up, None);
//! assert!(outcome.applied);
//! assert_eq!(outcome.move_count, 1);
//!
//! // The seed layout never starts solved.
//! assert!(!engine.is_solved());
//! ```

mod board;
mod direction;
mod engine;
mod error;
mod face;
mod history;
mod orientation;

pub use board::{Board, BoardConfig, Cell};
pub use direction::Direction;
pub use engine::{RollEngine, RollOutcome};
pub use error::{Error, Result};
pub use face::FaceColor;
pub use history::{MoveHistory, MoveRecord};
pub use orientation::{side_faces, Orientation, SIDE_BACK, SIDE_FRONT, SIDE_LEFT, SIDE_RIGHT};

// Re-export glam for convenience
pub use glam;
