//! A single board position.

use crate::side::Side;

/// One position on the board.
///
/// The coordinates are fixed at creation. The occupant can only move from
/// empty to owned, or from one owner to the other when a run is flipped; a
/// cell is never emptied again once a piece lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
    occupant: Option<Side>,
}

impl Cell {
    /// Creates an empty cell at the given coordinates.
    pub(crate) fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            occupant: None,
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the side owning this cell, or `None` if it is empty.
    #[inline]
    pub fn occupant(&self) -> Option<Side> {
        self.occupant
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Returns `true` if the cell holds a piece of `side`.
    #[inline]
    pub fn is_owned_by(&self, side: Side) -> bool {
        self.occupant == Some(side)
    }

    /// Puts a piece of `side` on the cell, replacing any previous owner.
    #[inline]
    pub(crate) fn place(&mut self, side: Side) {
        self.occupant = Some(side);
    }

    /// Character used by the board's text form.
    pub fn to_char(&self) -> char {
        self.occupant.map_or('-', Side::to_char)
    }
}
