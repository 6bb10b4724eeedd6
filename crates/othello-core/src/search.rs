//! Move selection for computer players.
//!
//! [`Minimax`] scores every legal move by playing it on a copy of the board.
//! At depth 1 the score is the static evaluation of the resulting position.
//! Deeper searches add the value of the opponent's best reply, searched one
//! ply shallower, to that static score. The reply value is added as is, not
//! negated, so this is a one-sided accumulation rather than negamax.
//!
//! Candidates are visited top to bottom, left to right. Among equal scores the
//! first candidate visited is kept.

use tracing::{debug, trace};

use crate::board::Board;
use crate::constants::SCORE_NONE;
use crate::error::{Error, Result};
use crate::eval::{UniformWeights, Weights, static_eval};
use crate::flip;
use crate::level::Level;
use crate::side::Side;
use crate::types::{Coord, Depth, Score};

/// A search result: the chosen cell and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Target cell, or `None` when the side had no legal move.
    pub square: Option<Coord>,
    /// Score of the move for the side that searched.
    pub value: Score,
}

impl Move {
    /// The result returned when there is nothing to play.
    pub const NONE: Move = Move {
        square: None,
        value: SCORE_NONE,
    };

    /// Returns `true` if this result carries no move.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.square.is_none()
    }
}

/// A policy that picks moves for a side.
pub trait Strategy {
    /// Returns the best move for `side`, or [`Move::NONE`] if it cannot move.
    fn get_best_move(&self, board: &Board, side: Side) -> Move;

    /// Returns the static score of `board` for `side`.
    fn evaluate(&self, board: &Board, side: Side) -> Score;
}

/// Depth-bounded minimax search with a pluggable weight policy.
#[derive(Debug, Clone)]
pub struct Minimax<W = UniformWeights> {
    level: Level,
    weights: W,
}

impl Minimax {
    /// Creates a search of the given strength using uniform weights.
    pub fn new(level: Level) -> Self {
        Self::with_weights(level, UniformWeights)
    }
}

impl<W: Weights> Minimax<W> {
    /// Creates a search of the given strength using `weights` for evaluation.
    pub fn with_weights(level: Level, weights: W) -> Self {
        Self { level, weights }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn weights(&self) -> &W {
        &self.weights
    }

    /// Returns the best move for `side`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMove`] if `side` cannot move.
    pub fn best_move(&self, board: &Board, side: Side) -> Result<Move> {
        let best = self.get_best_move(board, side);
        if best.is_none() {
            return Err(Error::NoLegalMove(side));
        }
        Ok(best)
    }

    /// Searches `depth` plies for the best move of `side`.
    ///
    /// Never mutates `board`; every candidate is tried on a clone.
    pub fn search(&self, board: &Board, side: Side, depth: Depth) -> Move {
        let mut best = Move::NONE;

        for (row, col) in board.legal_moves(side) {
            let mut hypothetical = board.clone();
            flip::perform_capture(&mut hypothetical, side, row, col);

            let value = self.score(&hypothetical, side, depth);
            trace!(%side, depth, row, col, value, "candidate");

            if best.is_none() || value > best.value {
                best = Move {
                    square: Some((row, col)),
                    value,
                };
            }
        }

        best
    }

    /// Scores the position reached after `side` moved.
    fn score(&self, board: &Board, side: Side, depth: Depth) -> Score {
        let value = static_eval(board, side, &self.weights);
        if depth > 1 {
            let reply = self.search(board, side.opposite(), depth - 1);
            value.saturating_add(reply.value)
        } else {
            value
        }
    }
}

impl<W: Weights> Strategy for Minimax<W> {
    fn get_best_move(&self, board: &Board, side: Side) -> Move {
        let best = self.search(board, side, self.level.depth());
        debug!(%side, depth = self.level.depth(), square = ?best.square, value = best.value, "best move");
        best
    }

    fn evaluate(&self, board: &Board, side: Side) -> Score {
        static_eval(board, side, &self.weights)
    }
}

/// Searches `depth` plies for `side` with the uniform evaluator.
pub fn get_best_move(board: &Board, side: Side, depth: Depth) -> Move {
    Minimax::new(Level::ONE).search(board, side, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::TableWeights;

    #[test]
    fn test_depth_one_opening_picks_first_in_row_major_order() {
        let board = Board::default();
        let best = get_best_move(&board, Side::White, 1);
        assert_eq!(best.square, Some((2, 3)));
        assert_eq!(best.value, 3);

        let best = get_best_move(&board, Side::Black, 1);
        assert_eq!(best.square, Some((2, 4)));
        assert_eq!(best.value, 3);
    }

    #[test]
    fn test_no_legal_move_returns_sentinel() {
        let board = Board::from_string(4, 4, "OOOOOOOOOOOOOOO-").unwrap();
        let best = get_best_move(&board, Side::Black, 3);
        assert!(best.is_none());
        assert_eq!(best, Move::NONE);

        let minimax = Minimax::new(Level::TWO);
        assert_eq!(
            minimax.best_move(&board, Side::Black),
            Err(Error::NoLegalMove(Side::Black))
        );
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let board = Board::default();
        let before = board.clone();
        let _ = get_best_move(&board, Side::White, 3);
        assert_eq!(board, before);
    }

    #[test]
    fn test_depth_two_adds_opponent_best_reply() {
        let board = Board::default();
        let minimax = Minimax::new(Level::TWO);
        let best = minimax.get_best_move(&board, Side::White);

        // Recompute the expected value by hand for the chosen move.
        let (row, col) = best.square.unwrap();
        let mut after = board.clone();
        after.apply_move(Side::White, row, col).unwrap();
        let reply = get_best_move(&after, Side::Black, 1);
        assert_eq!(best.value, 3 + reply.value);
    }

    #[test]
    fn test_reply_less_candidate_scores_at_bottom() {
        // White capturing at (0,2) wipes out black; black then has no reply.
        let board = Board::from_string(4, 4, "OX--------------").unwrap();
        let best = get_best_move(&board, Side::White, 2);
        assert_eq!(best.square, Some((0, 2)));
        assert_eq!(best.value, 3i32.saturating_add(SCORE_NONE));
    }

    #[test]
    fn test_weights_change_choice() {
        // Both moves flip one piece; only the table sees the corner.
        let board = Board::from_string(
            8,
            8,
            "--------\
             --------\
             --------\
             ---XO---\
             --------\
             --------\
             --------\
             -----OX-",
        )
        .unwrap();

        let candidates: Vec<_> = board.legal_moves(Side::White).collect();
        assert_eq!(candidates, vec![(3, 2), (7, 7)]);

        let uniform = Minimax::new(Level::ONE);
        assert_eq!(uniform.get_best_move(&board, Side::White), Move {
            square: Some((3, 2)),
            value: 3,
        });

        let positional = Minimax::with_weights(Level::ONE, TableWeights::classic_8x8());
        assert_eq!(positional.get_best_move(&board, Side::White), Move {
            square: Some((7, 7)),
            value: 90,
        });
    }

    #[test]
    fn test_lone_candidate_scoring_at_sentinel_is_still_chosen() {
        // White's only move is (0,2). Afterwards White trails 3 to 4 and Black
        // cannot reply, so the score saturates to exactly the sentinel.
        let board = Board::from_string(
            4,
            4,
            "OX--\
             ----\
             ----\
             XXXX",
        )
        .unwrap();
        let candidates: Vec<_> = board.legal_moves(Side::White).collect();
        assert_eq!(candidates, vec![(0, 2)]);

        let best = get_best_move(&board, Side::White, 2);
        assert_eq!(best.square, Some((0, 2)));
        assert_eq!(best.value, SCORE_NONE);

        let minimax = Minimax::new(Level::TWO);
        assert_eq!(minimax.best_move(&board, Side::White), Ok(best));
    }

    #[test]
    fn test_every_candidate_without_reply_still_returns_a_move() {
        let board = Board::from_string(4, 4, "OX-------------X").unwrap();
        let best = get_best_move(&board, Side::White, 2);
        assert_eq!(best.square, Some((0, 2)));
        assert_eq!(best.value, 2i32.saturating_add(SCORE_NONE));
    }

    #[test]
    fn test_evaluate_matches_static_eval() {
        let board = Board::default();
        let minimax = Minimax::new(Level::ONE);
        assert_eq!(minimax.evaluate(&board, Side::White), 0);
    }
}
