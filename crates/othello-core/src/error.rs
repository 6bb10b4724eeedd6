//! Error types for the Othello engine.

use crate::side::Side;

/// Why a move was refused by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The target lies outside the board.
    OutOfBounds,
    /// The target already holds a piece.
    Occupied,
    /// The target captures nothing in any direction.
    NoCapture,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => write!(f, "out of bounds"),
            IllegalMoveReason::Occupied => write!(f, "cell is occupied"),
            IllegalMoveReason::NoCapture => write!(f, "captures nothing"),
        }
    }
}

/// Errors reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Board dimensions must be equal, even and at least 4.
    #[error("Invalid board dimensions {rows}x{columns}: rows and columns must be equal, even and at least 4")]
    InvalidDimensions { rows: usize, columns: usize },
    /// The requested move cannot be played.
    #[error("Illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: IllegalMoveReason,
    },
    /// A side has no player assigned.
    #[error("No player assigned to {0}")]
    MissingPlayer(Side),
    /// The side asked to move has no legal move.
    #[error("{0} has no legal move")]
    NoLegalMove(Side),
    /// Search depth must be positive.
    #[error("Invalid level {0}: search depth must be at least 1")]
    InvalidLevel(u32),
    /// Malformed board text.
    #[error("Invalid board string: {0}")]
    InvalidBoardString(String),
}

/// Convenience type alias for Results with the engine [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
