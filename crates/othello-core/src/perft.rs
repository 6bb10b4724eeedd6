use crate::board::Board;
use crate::side::Side;

/// Executes a perft run starting from the standard 8×8 initial position.
///
/// # Arguments
///
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total node count the search visits from the initial position.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Board::default(), Side::White, depth)
}

/// Counts the leaves of the legal-move tree below `board` with `side` to move.
///
/// A forced pass does not consume depth, and a position where neither side
/// can move counts as a single leaf.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    let mut nodes = 0;
    let mut moves = board.legal_moves(side).peekable();

    if moves.peek().is_some() {
        for (row, col) in moves {
            if depth <= 1 {
                nodes += 1;
            } else {
                let mut next = board.clone();
                crate::flip::perform_capture(&mut next, side, row, col);
                nodes += perft(&next, side.opposite(), depth - 1);
            }
        }
    } else if board.has_legal_moves(side.opposite()) {
        nodes += perft(board, side.opposite(), depth);
    } else {
        nodes += 1;
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_shallow() {
        assert_eq!(perft_root(1), 4);
        assert_eq!(perft_root(2), 12);
        assert_eq!(perft_root(3), 56);
        assert_eq!(perft_root(4), 244);
    }

    #[test]
    fn test_perft_terminal_position_is_one_leaf() {
        let board = Board::from_string(4, 4, "OOOOOOOOXXXXXXXX").unwrap();
        assert_eq!(perft(&board, Side::White, 5), 1);
    }

    #[test]
    fn test_perft_pass_keeps_depth() {
        // Black cannot move, white can: the pass does not use up the ply.
        let board = Board::from_string(4, 4, "OX--------------").unwrap();
        assert_eq!(perft(&board, Side::Black, 1), perft(&board, Side::White, 1));
    }
}
