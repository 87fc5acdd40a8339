//! Error types for board construction

use glam::IVec2;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building a board
///
/// Only construction can fail. An illegal roll is not an error; it comes
/// back as a declined [`RollOutcome`](crate::RollOutcome) with the board
/// untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Board dimensions must both be at least 1
    #[error("board dimensions must be at least 1x1, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    /// A configured blocked cell lies outside the grid
    #[error("blocked cell {cell} is outside the board")]
    BlockedOutOfBounds { cell: IVec2 },

    /// The grid center is reserved for the empty slot
    #[error("blocked cell {cell} covers the center slot reserved for the empty cell")]
    EmptySlotBlocked { cell: IVec2 },
}
