//! Invariants checked over randomly played games.

use othello_core::board::Board;
use othello_core::side::Side;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

const GAMES: u64 = 40;

/// Plays random games and calls `check` with the board before and after
/// every move, along with the mover and the target cell.
fn random_games(size: usize, mut check: impl FnMut(&Board, &Board, Side, (usize, usize))) {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(size, size).unwrap();
        let mut side = Side::White;

        loop {
            let moves: Vec<_> = board.legal_moves(side).collect();
            let Some(&(row, col)) = moves.choose(&mut rng) else {
                if board.has_legal_moves(side.opposite()) {
                    side = side.opposite();
                    continue;
                }
                break;
            };

            let before = board.clone();
            board.apply_move(side, row, col).unwrap();
            check(&before, &board, side, (row, col));
            side = side.opposite();
        }

        assert!(board.is_game_over());
    }
}

#[test]
fn test_cell_counts_always_sum_to_board_size() {
    for size in [4, 6, 8] {
        random_games(size, |_, after, _, _| {
            assert_eq!(
                after.count(Side::White) + after.count(Side::Black) + after.empty_count(),
                size * size
            );
        });
    }
}

#[test]
fn test_move_never_loses_pieces_for_mover() {
    random_games(8, |before, after, side, _| {
        assert!(after.count(side) > before.count(side));
        assert!(after.count(side.opposite()) < before.count(side.opposite()));
    });
}

#[test]
fn test_occupancy_is_monotonic() {
    random_games(8, |before, after, _, _| {
        for (old, new) in before.cells().zip(after.cells()) {
            if !old.is_empty() {
                assert!(!new.is_empty());
            }
        }
    });
}

#[test]
fn test_flips_match_legality_and_capture() {
    random_games(8, |before, after, side, (row, col)| {
        let flips = before.flips(side, row, col);
        assert!(!flips.is_empty());

        // Exactly the previewed cells changed owner, plus the target itself.
        let changed: Vec<_> = before
            .cells()
            .zip(after.cells())
            .filter(|(old, new)| old.occupant() != new.occupant())
            .map(|(_, new)| (new.row(), new.col()))
            .filter(|&pos| pos != (row, col))
            .collect();

        let mut expected = flips.clone();
        expected.sort_unstable();
        assert_eq!(changed, expected);
        assert_eq!(after.count(side), before.count(side) + flips.len() + 1);
    });
}

#[test]
fn test_every_empty_cell_is_legal_iff_it_flips() {
    random_games(6, |_, after, _, _| {
        for side in Side::ALL {
            for cell in after.cells() {
                let legal = after.is_legal_move(side, cell.row(), cell.col());
                let flips = after.flips(side, cell.row(), cell.col());
                assert_eq!(legal, !flips.is_empty());
            }
        }
    });
}

#[test]
fn test_pass_and_game_over_agree_with_legal_moves() {
    random_games(6, |_, after, _, _| {
        let white = after.has_legal_moves(Side::White);
        let black = after.has_legal_moves(Side::Black);
        assert_eq!(after.is_game_over(), !white && !black);
    });
}
