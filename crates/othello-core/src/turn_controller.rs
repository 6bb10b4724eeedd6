//! Turn progression for an Othello game.
//!
//! This module provides the `TurnController` which tracks whose turn it is,
//! lets computer players move, waits for human input, and detects forced
//! passes and the end of the game.
//!
//! The controller moves through three phases:
//!
//! ```text
//! AwaitingFirstMove --start()--> SideToMove(White) <--> SideToMove(Black)
//!                                        |                     |
//!                                        +------> GameOver <---+
//! ```
//!
//! Each call to [`TurnController::advance`] performs one activation of the
//! side to move. Human moves arrive through [`TurnController::attempt_move`].

use tracing::debug;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::player::PlayerKind;
use crate::search::Minimax;
use crate::side::Side;
use crate::types::Coord;

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No side has been activated yet.
    AwaitingFirstMove,
    /// `Side` is to move.
    SideToMove(Side),
    /// Neither side can move. Terminal.
    GameOver,
}

/// Outcome of one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// A computer player moved.
    Moved { side: Side, row: usize, col: usize },
    /// The side had no legal move and its turn was skipped.
    Passed(Side),
    /// A human player has legal moves and must act through `attempt_move`.
    AwaitingHuman(Side),
    /// Neither side can move.
    GameOver,
}

/// Drives a game on a board it owns.
///
/// The controller is the only writer of its board. Callers read it through
/// [`TurnController::board`] to render pieces and highlights.
#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    players: [Option<PlayerKind>; 2],
    current: Option<Side>,
    game_over: bool,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl TurnController {
    /// Creates a controller for `board` with no players assigned.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            players: [None, None],
            current: None,
            game_over: false,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Assigns the player controlling `side`.
    pub fn set_player(&mut self, side: Side, kind: PlayerKind) {
        self.players[side.index()] = Some(kind);
    }

    /// Returns the player controlling `side`, if any.
    pub fn player(&self, side: Side) -> Option<PlayerKind> {
        self.players[side.index()]
    }

    /// Returns the side to move, if the game has started.
    pub fn current_side(&self) -> Option<Side> {
        self.current
    }

    /// Returns the player of the side to move.
    pub fn current_player(&self) -> Option<PlayerKind> {
        self.current.and_then(|side| self.player(side))
    }

    /// Returns `true` if the side to move is controlled by a human.
    pub fn is_current_human(&self) -> bool {
        self.current_player().is_some_and(PlayerKind::is_human)
    }

    pub fn phase(&self) -> Phase {
        match self.current {
            _ if self.game_over => Phase::GameOver,
            None => Phase::AwaitingFirstMove,
            Some(side) => Phase::SideToMove(side),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Begins play.
    ///
    /// White moves first if no side has been activated yet. The side to move
    /// is then activated once, as by [`TurnController::advance`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPlayer`] if either side has no player.
    pub fn start(&mut self) -> Result<TurnEvent> {
        for side in Side::ALL {
            if self.player(side).is_none() {
                return Err(Error::MissingPlayer(side));
            }
        }

        if self.current.is_none() {
            self.current = Some(Side::White);
        }
        self.advance()
    }

    /// Activates the side to move once.
    ///
    /// - A human with legal moves is left to act: returns `AwaitingHuman`.
    /// - A computer with legal moves searches, plays and hands the turn over.
    /// - A side without legal moves passes, unless the opponent cannot move
    ///   either, in which case the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPlayer`] if the side to move has no player.
    pub fn advance(&mut self) -> Result<TurnEvent> {
        let side = match self.phase() {
            Phase::AwaitingFirstMove => return self.start(),
            Phase::GameOver => return Ok(TurnEvent::GameOver),
            Phase::SideToMove(side) => side,
        };
        let kind = self.player(side).ok_or(Error::MissingPlayer(side))?;

        if !self.board.has_legal_moves(side) {
            if !self.board.has_legal_moves(side.opposite()) {
                self.game_over = true;
                debug!(
                    white = self.board.count(Side::White),
                    black = self.board.count(Side::Black),
                    "game over"
                );
                return Ok(TurnEvent::GameOver);
            }

            debug!(%side, "forced pass");
            self.current = Some(side.opposite());
            return Ok(TurnEvent::Passed(side));
        }

        match kind {
            PlayerKind::Human => Ok(TurnEvent::AwaitingHuman(side)),
            PlayerKind::Computer(level) => {
                let best = Minimax::new(level).best_move(&self.board, side)?;
                let (row, col) = best.square.ok_or(Error::NoLegalMove(side))?;
                self.board.apply_move(side, row, col)?;
                debug!(%side, row, col, value = best.value, "computer moved");
                self.current = Some(side.opposite());
                Ok(TurnEvent::Moved { side, row, col })
            }
        }
    }

    /// Activates sides until a human must act or the game ends.
    pub fn run_until_input(&mut self) -> Result<TurnEvent> {
        self.run_until_input_with(|_| {})
    }

    /// Like [`TurnController::run_until_input`], handing every event,
    /// including the final one, to `on_event` as it happens.
    pub fn run_until_input_with(
        &mut self,
        mut on_event: impl FnMut(TurnEvent),
    ) -> Result<TurnEvent> {
        loop {
            let event = self.advance()?;
            on_event(event);
            if matches!(event, TurnEvent::AwaitingHuman(_) | TurnEvent::GameOver) {
                return Ok(event);
            }
        }
    }

    /// Plays a human move for the side to move.
    ///
    /// Only accepted while a human side is to move. An illegal target leaves
    /// the game untouched and returns `false`.
    ///
    /// # Returns
    ///
    /// `true` if the move was played and the turn passed to the opponent.
    pub fn attempt_move(&mut self, row: usize, col: usize) -> bool {
        let Phase::SideToMove(side) = self.phase() else {
            return false;
        };
        if !self.is_current_human() {
            return false;
        }

        match self.board.apply_move(side, row, col) {
            Ok(()) => {
                debug!(%side, row, col, "human moved");
                self.current = Some(side.opposite());
                true
            }
            Err(err) => {
                debug!(%side, %err, "move rejected");
                false
            }
        }
    }

    /// Starts a new game on a fresh board with White to move.
    ///
    /// Player assignments are kept.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Some(Side::White);
        self.game_over = false;
        debug!("reset");
    }

    /// Legal moves of the side to move, for highlighting.
    pub fn legal_moves(&self) -> Vec<Coord> {
        match self.phase() {
            Phase::SideToMove(side) => self.board.legal_moves(side).collect(),
            _ => Vec::new(),
        }
    }

    /// Returns the number of pieces of `side`.
    pub fn count(&self, side: Side) -> usize {
        self.board.count(side)
    }

    /// Returns the piece counts as `(white, black)`.
    pub fn score(&self) -> (usize, usize) {
        (self.count(Side::White), self.count(Side::Black))
    }

    /// Status line for display, e.g. `White's turn` or `Game Over`.
    pub fn status(&self) -> String {
        match self.phase() {
            Phase::AwaitingFirstMove => "Select players, then start".to_string(),
            Phase::SideToMove(side) => format!("{side}'s turn"),
            Phase::GameOver => "Game Over".to_string(),
        }
    }

    /// Piece counts for display, e.g. `White: 2 Black: 2`.
    pub fn pieces(&self) -> String {
        let (white, black) = self.score();
        format!("White: {white} Black: {black}")
    }

    /// Returns the side with more pieces once the game is over.
    ///
    /// `None` while the game is running or on a draw.
    pub fn winner(&self) -> Option<Side> {
        if !self.game_over {
            return None;
        }
        let (white, black) = self.score();
        match white.cmp(&black) {
            std::cmp::Ordering::Greater => Some(Side::White),
            std::cmp::Ordering::Less => Some(Side::Black),
            std::cmp::Ordering::Equal => None,
        }
    }
}
