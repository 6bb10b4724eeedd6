//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Evaluation score. Positive values favour the side being evaluated.
pub type Score = i32;

/// A board coordinate as `(row, col)`.
pub type Coord = (usize, usize);
