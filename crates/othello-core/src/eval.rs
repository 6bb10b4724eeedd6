//! Static position evaluation.
//!
//! The evaluator sums a per-cell weight over the board: `+weight` for each
//! piece of the evaluated side and `-weight` for each opponent piece. The
//! weight function is a pluggable policy; with [`UniformWeights`] the score is
//! the plain piece differential.

use crate::board::Board;
use crate::side::Side;
use crate::types::Score;

/// Weight policy used by [`static_eval`].
pub trait Weights {
    /// Returns the weight of the cell at `(row, col)`.
    fn weight(&self, row: usize, col: usize) -> Score;
}

/// Gives every cell a weight of 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformWeights;

impl Weights for UniformWeights {
    #[inline]
    fn weight(&self, _row: usize, _col: usize) -> Score {
        1
    }
}

/// Weights read from a row-major table.
///
/// Cells outside the table weigh 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableWeights {
    columns: usize,
    weights: Vec<Score>,
}

/// Classic 8×8 positional table: corners are prized, the cells next to them
/// are penalised, edges are mildly favoured.
#[rustfmt::skip]
const CLASSIC_8X8: [Score; 64] = [
    100, -20,  10,   5,   5,  10, -20, 100,
    -20, -50,  -2,  -2,  -2,  -2, -50, -20,
     10,  -2,   1,   1,   1,   1,  -2,  10,
      5,  -2,   1,   0,   0,   1,  -2,   5,
      5,  -2,   1,   0,   0,   1,  -2,   5,
     10,  -2,   1,   1,   1,   1,  -2,  10,
    -20, -50,  -2,  -2,  -2,  -2, -50, -20,
    100, -20,  10,   5,   5,  10, -20, 100,
];

impl TableWeights {
    /// Creates a table from row-major weights.
    ///
    /// # Arguments
    /// * `columns` - Row width of the table.
    /// * `weights` - The weights, `columns` per row.
    pub fn new(columns: usize, weights: Vec<Score>) -> Self {
        Self { columns, weights }
    }

    /// The classic positional table for a standard 8×8 board.
    pub fn classic_8x8() -> Self {
        Self::new(8, CLASSIC_8X8.to_vec())
    }
}

impl Weights for TableWeights {
    #[inline]
    fn weight(&self, row: usize, col: usize) -> Score {
        if col >= self.columns {
            return 0;
        }
        self.weights
            .get(row * self.columns + col)
            .copied()
            .unwrap_or(0)
    }
}

/// Scores `board` from the point of view of `side`.
pub fn static_eval<W: Weights + ?Sized>(board: &Board, side: Side, weights: &W) -> Score {
    board
        .cells()
        .map(|cell| match cell.occupant() {
            Some(s) if s == side => weights.weight(cell.row(), cell.col()),
            Some(_) => -weights.weight(cell.row(), cell.col()),
            None => 0,
        })
        .sum()
}
