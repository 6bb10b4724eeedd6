//! Computer strength levels.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::Depth;

/// Strength of a computer player, expressed as its search depth in plies.
///
/// A level is always at least 1: depth 1 scores each candidate move with the
/// static evaluator alone, every further level adds one ply of look-ahead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(Depth);

impl Level {
    pub const ONE: Level = Level(1);
    pub const TWO: Level = Level(2);
    pub const THREE: Level = Level(3);

    /// The strengths offered to players choosing a computer opponent.
    pub const PRESETS: [Level; 3] = [Level::ONE, Level::TWO, Level::THREE];

    /// Creates a level with the given search depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLevel`] if `depth` is 0.
    pub fn new(depth: Depth) -> Result<Level> {
        if depth == 0 {
            return Err(Error::InvalidLevel(depth));
        }
        Ok(Level(depth))
    }

    /// Returns the search depth of this level.
    #[inline]
    pub fn depth(self) -> Depth {
        self.0
    }

    /// Human readable name, e.g. `Computer, Level 2`.
    pub fn label(self) -> String {
        format!("Computer, Level {}", self.0)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::ONE
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
