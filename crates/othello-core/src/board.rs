//! Othello board representation as a grid of cells.

use std::fmt;

use crate::cell::Cell;
use crate::constants::{DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{Error, IllegalMoveReason, Result};
use crate::flip;
use crate::side::Side;
use crate::types::Coord;

/// An N×N Othello board.
///
/// The board owns its cells and knows nothing about players or search.
/// Cloning produces an independent deep copy, which is how the search builds
/// hypothetical positions without touching the live board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Default for Board {
    /// Creates a standard 8×8 board in the starting position.
    fn default() -> Self {
        let mut board = Board::empty(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE);
        board.reset();
        board
    }
}

impl Board {
    /// Creates a board of the given size in the starting position.
    ///
    /// # Arguments
    /// * `rows` - Number of rows.
    /// * `columns` - Number of columns.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimensions`] unless `rows == columns` and both
    /// are even and at least 4.
    pub fn new(rows: usize, columns: usize) -> Result<Board> {
        validate_dimensions(rows, columns)?;
        let mut board = Board::empty(rows, columns);
        board.reset();
        Ok(board)
    }

    /// Creates a `Board` from a string representation.
    ///
    /// The string holds `rows * columns` characters in row-major order:
    /// - `'O'` for a white piece
    /// - `'X'` for a black piece
    /// - `'-'` for an empty cell
    ///
    /// Whitespace is ignored so fixtures can be laid out one row per line.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimensions`] for a bad size and
    /// [`Error::InvalidBoardString`] for unknown characters or a wrong length.
    pub fn from_string(rows: usize, columns: usize, board_string: &str) -> Result<Board> {
        validate_dimensions(rows, columns)?;
        let mut board = Board::empty(rows, columns);

        let mut len = 0;
        for c in board_string.chars().filter(|c| !c.is_whitespace()) {
            if len >= board.cells.len() {
                return Err(Error::InvalidBoardString(format!(
                    "expected {} cells, got more",
                    board.cells.len()
                )));
            }
            match c {
                '-' | '.' => {}
                _ => match Side::from_char(c) {
                    Some(side) => board.cells[len].place(side),
                    None => {
                        return Err(Error::InvalidBoardString(format!(
                            "unexpected character '{c}' at cell {len}"
                        )));
                    }
                },
            }
            len += 1;
        }

        if len != board.cells.len() {
            return Err(Error::InvalidBoardString(format!(
                "expected {} cells, got {len}",
                board.cells.len()
            )));
        }

        Ok(board)
    }

    fn empty(rows: usize, columns: usize) -> Board {
        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| Cell::new(row, col)))
            .collect();
        Board {
            rows,
            columns,
            cells,
        }
    }

    /// Clears every cell and places the four starting pieces at the center.
    ///
    /// With `half = rows / 2`, Black occupies `(half-1, half-1)` and
    /// `(half, half)`, White occupies `(half-1, half)` and `(half, half-1)`.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::new(cell.row(), cell.col());
        }

        let half = self.rows / 2;
        self.place((half - 1, half - 1), Side::Black);
        self.place((half, half), Side::Black);
        self.place((half - 1, half), Side::White);
        self.place((half, half - 1), Side::White);
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at `(row, col)`, or `None` if it is off the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.columns {
            self.cells.get(row * self.columns + col)
        } else {
            None
        }
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the number of cells occupied by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(side)).count()
    }

    /// Returns the number of unoccupied cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Enumerates the legal moves of `side`.
    ///
    /// Moves are produced top to bottom, then left to right. The sequence is
    /// recomputed on every call.
    pub fn legal_moves(&self, side: Side) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(move |c| flip::is_legal_move(self, side, c.row(), c.col()))
            .map(|c| (c.row(), c.col()))
    }

    /// Checks if `side` has at least one legal move.
    #[inline]
    pub fn has_legal_moves(&self, side: Side) -> bool {
        self.legal_moves(side).next().is_some()
    }

    /// Checks if `side` may play at `(row, col)`.
    #[inline]
    pub fn is_legal_move(&self, side: Side, row: usize, col: usize) -> bool {
        flip::is_legal_move(self, side, row, col)
    }

    /// Checks if neither side can move.
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_moves(Side::White) && !self.has_legal_moves(Side::Black)
    }

    /// Lists the cells that `side` would flip by playing at `(row, col)`.
    ///
    /// Empty for illegal targets.
    pub fn flips(&self, side: Side, row: usize, col: usize) -> Vec<Coord> {
        if self.is_legal_move(side, row, col) {
            flip::captures(self, side, row, col)
        } else {
            Vec::new()
        }
    }

    /// Plays a move for `side` at `(row, col)`, flipping every captured run.
    ///
    /// # Errors
    /// Returns [`Error::IllegalMove`] if the target is off the board, already
    /// occupied, or captures nothing. The board is left untouched in that case.
    pub fn apply_move(&mut self, side: Side, row: usize, col: usize) -> Result<()> {
        let illegal = |reason| Error::IllegalMove { row, col, reason };

        let cell = self
            .get(row, col)
            .ok_or_else(|| illegal(IllegalMoveReason::OutOfBounds))?;
        if !cell.is_empty() {
            return Err(illegal(IllegalMoveReason::Occupied));
        }
        if !flip::is_legal_move(self, side, row, col) {
            return Err(illegal(IllegalMoveReason::NoCapture));
        }

        flip::perform_capture(self, side, row, col);
        Ok(())
    }

    /// Returns the neighbour of `pos` in direction `dir`, if it is on the board.
    #[inline]
    pub(crate) fn step(&self, (row, col): Coord, (dr, dc): (isize, isize)) -> Option<Coord> {
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        (row < self.rows && col < self.columns).then_some((row, col))
    }

    /// Returns the occupant at an on-board coordinate.
    #[inline]
    pub(crate) fn occupant_at(&self, (row, col): Coord) -> Option<Side> {
        self.get(row, col).and_then(Cell::occupant)
    }

    #[inline]
    pub(crate) fn place(&mut self, (row, col): Coord, side: Side) {
        debug_assert!(row < self.rows && col < self.columns);
        self.cells[row * self.columns + col].place(side);
    }
}

impl fmt::Display for Board {
    /// Renders the board one row per line using `O`, `X` and `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.columns).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

fn validate_dimensions(rows: usize, columns: usize) -> Result<()> {
    if rows != columns || rows < MIN_BOARD_SIZE || !rows.is_multiple_of(2) {
        return Err(Error::InvalidDimensions { rows, columns });
    }
    Ok(())
}
