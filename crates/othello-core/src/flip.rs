//! Legality and capture resolution.
//!
//! Both questions are answered by the same directional walk: starting next to
//! the target cell, step over opponent pieces until the walk leaves the board,
//! reaches an empty cell, or reaches a piece of the mover. Only the last case
//! with at least one opponent piece stepped over is a capturable run. A move is
//! legal exactly when some direction yields such a run, and playing it flips
//! exactly those runs.

use crate::board::Board;
use crate::side::Side;
use crate::types::Coord;

/// The eight compass directions as `(row delta, column delta)`.
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Length of the capturable run from `(row, col)` in direction `dir`.
///
/// Returns 0 when the direction captures nothing: the neighbour is off the
/// board, empty or friendly, or the opponent run is not closed by a piece of
/// `side`.
fn run_length(board: &Board, side: Side, (row, col): Coord, dir: (isize, isize)) -> usize {
    let opponent = side.opposite();
    let mut len = 0;
    let mut pos = (row, col);

    while let Some(next) = board.step(pos, dir) {
        match board.occupant_at(next) {
            Some(s) if s == opponent => {
                len += 1;
                pos = next;
            }
            Some(_) => return len,
            None => return 0,
        }
    }

    0
}

/// Returns `true` if `side` may play at `(row, col)`.
///
/// The target must be on the board, empty, and close at least one run.
pub(crate) fn is_legal_move(board: &Board, side: Side, row: usize, col: usize) -> bool {
    match board.get(row, col) {
        Some(cell) if cell.is_empty() => DIRECTIONS
            .iter()
            .any(|&dir| run_length(board, side, (row, col), dir) > 0),
        _ => false,
    }
}

/// Lists the cells `side` would flip by playing at `(row, col)`.
///
/// Does not check whether the target itself is empty or on the board.
pub(crate) fn captures(board: &Board, side: Side, row: usize, col: usize) -> Vec<Coord> {
    let mut flipped = Vec::new();
    for dir in DIRECTIONS {
        let len = run_length(board, side, (row, col), dir);
        let mut pos = (row, col);
        for _ in 0..len {
            // Every step was already validated by `run_length`.
            let Some(next) = board.step(pos, dir) else {
                break;
            };
            flipped.push(next);
            pos = next;
        }
    }
    flipped
}

/// Places `side` at `(row, col)` and flips every captured run.
///
/// Returns the number of flipped pieces. The caller is responsible for having
/// checked legality.
pub(crate) fn perform_capture(board: &mut Board, side: Side, row: usize, col: usize) -> usize {
    let flipped = captures(board, side, row, col);
    board.place((row, col), side);
    for &pos in &flipped {
        board.place(pos, side);
    }
    flipped.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::from_string(8, 8, text).unwrap()
    }

    #[test]
    fn test_opening_captures() {
        let board = Board::new(8, 8).unwrap();
        assert_eq!(captures(&board, Side::White, 2, 3), vec![(3, 3)]);
        assert_eq!(captures(&board, Side::White, 3, 2), vec![(3, 3)]);
        assert_eq!(captures(&board, Side::White, 4, 5), vec![(4, 4)]);
        assert_eq!(captures(&board, Side::White, 5, 4), vec![(4, 4)]);
        assert!(captures(&board, Side::White, 0, 0).is_empty());
    }

    #[test]
    fn test_adjacent_friendly_piece_captures_nothing() {
        let board = board(
            "--------\
             --------\
             --------\
             ---OO---\
             --------\
             --------\
             --------\
             --------",
        );
        assert!(!is_legal_move(&board, Side::White, 3, 2));
        assert!(!is_legal_move(&board, Side::White, 3, 5));
    }

    #[test]
    fn test_run_open_at_board_edge_captures_nothing() {
        let board = board(
            "XXXXXXX-\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        );
        // The run of black pieces reaches the left edge without a white closer.
        assert!(!is_legal_move(&board, Side::White, 0, 7));
    }

    #[test]
    fn test_run_ending_on_empty_cell_captures_nothing() {
        let board = board(
            "--------\
             --------\
             --------\
             --XX-O--\
             --------\
             --------\
             --------\
             --------",
        );
        assert!(!is_legal_move(&board, Side::White, 3, 1));
    }

    #[test]
    fn test_multi_direction_capture() {
        let mut board = board(
            "O-O-O---\
             -XXX----\
             OX-XO---\
             -XXX----\
             O-O-O---\
             --------\
             --------\
             --------",
        );
        assert!(is_legal_move(&board, Side::White, 2, 2));
        let flipped = perform_capture(&mut board, Side::White, 2, 2);
        assert_eq!(flipped, 8);
        assert_eq!(board.count(Side::Black), 0);
        assert_eq!(board.count(Side::White), 17);
    }

    #[test]
    fn test_long_run_flips_whole_line() {
        let mut board = board(
            "-XXXXXXO\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------\
             --------",
        );
        let flipped = perform_capture(&mut board, Side::White, 0, 0);
        assert_eq!(flipped, 6);
        assert_eq!(board.count(Side::White), 8);
        assert_eq!(board.count(Side::Black), 0);
    }

    #[test]
    fn test_occupied_target_is_not_legal() {
        let board = Board::new(8, 8).unwrap();
        assert!(!is_legal_move(&board, Side::White, 3, 3));
        assert!(!is_legal_move(&board, Side::Black, 3, 4));
    }

    #[test]
    fn test_out_of_bounds_target_is_not_legal() {
        let board = Board::new(8, 8).unwrap();
        assert!(!is_legal_move(&board, Side::White, 8, 0));
        assert!(!is_legal_move(&board, Side::White, 0, usize::MAX));
    }
}
