//! Global constants

use crate::types::Score;

/// Side length of a standard Othello board.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Smallest board that still has room around the four starting pieces.
pub const MIN_BOARD_SIZE: usize = 4;

/// Value of a search result that carries no move.
pub const SCORE_NONE: Score = Score::MIN;
