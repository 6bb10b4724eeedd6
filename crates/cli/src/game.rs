//! Game state for the terminal front end.
//!
//! `Game` wraps the core [`TurnController`] and remembers the last move so the
//! board can be drawn with it highlighted.

use colored::Colorize;
use othello_core::board::Board;
use othello_core::player::PlayerKind;
use othello_core::side::Side;
use othello_core::turn_controller::{TurnController, TurnEvent};
use othello_core::types::Coord;

use crate::parse::{column_name, format_square};

pub struct Game {
    controller: TurnController,
    last_move: Option<Coord>,
}

impl Game {
    /// Creates a game on `board` with the given players.
    pub fn new(board: Board, white: PlayerKind, black: PlayerKind) -> Self {
        let mut controller = TurnController::new(board);
        controller.set_player(Side::White, white);
        controller.set_player(Side::Black, black);
        Self {
            controller,
            last_move: None,
        }
    }

    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    /// Lets computer players move until a human must act or the game ends.
    ///
    /// Every event along the way is handed to `on_event`.
    pub fn run_until_input(
        &mut self,
        mut on_event: impl FnMut(TurnEvent),
    ) -> othello_core::Result<TurnEvent> {
        let last_move = &mut self.last_move;
        self.controller.run_until_input_with(|event| {
            if let TurnEvent::Moved { row, col, .. } = event {
                *last_move = Some((row, col));
            }
            on_event(event);
        })
    }

    /// Plays a human move. Returns `false` if it was rejected.
    pub fn play(&mut self, (row, col): Coord) -> bool {
        let accepted = self.controller.attempt_move(row, col);
        if accepted {
            self.last_move = Some((row, col));
        }
        accepted
    }

    pub fn reset(&mut self) {
        self.controller.reset();
        self.last_move = None;
    }

    /// Legal moves of the side to move in algebraic notation.
    pub fn legal_moves_text(&self) -> String {
        self.controller
            .legal_moves()
            .into_iter()
            .map(format_square)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Prints a colored representation of the board to the terminal.
    pub fn print(&self) {
        let board = self.controller.board();
        let columns = board.columns();
        let legal = self.controller.legal_moves();
        let (white, black) = self.controller.score();

        let header: String = (0..columns)
            .map(|col| format!("  {} ", column_name(col).unwrap_or('?')))
            .collect();
        println!("    {header}");
        println!("{}", grid_line(columns, '┌', '┬', '┐'));

        for row in 0..board.rows() {
            print!("{:>3} │", row + 1);

            for col in 0..columns {
                let occupant = board.get(row, col).and_then(|cell| cell.occupant());
                let is_last_move = self.last_move == Some((row, col));

                let symbol = match occupant {
                    Some(Side::Black) if is_last_move => " X ".on_bright_black().bright_green(),
                    Some(Side::White) if is_last_move => " O ".on_bright_black().bright_yellow(),
                    Some(Side::Black) => " X ".bright_green(),
                    Some(Side::White) => " O ".bright_yellow(),
                    None if legal.contains(&(row, col)) => " · ".bright_cyan(),
                    None => "   ".normal(),
                };
                print!("{symbol}│");
            }

            match row {
                0 => println!("   {}", self.turn_line()),
                1 => println!("   White: {}", format!("{white:2}").bright_yellow()),
                2 => println!("   Black: {}", format!("{black:2}").bright_green()),
                3 if self.controller.is_game_over() => {
                    println!("   {}", "*** Game Over ***".bright_red())
                }
                _ => println!(),
            }

            if row + 1 < board.rows() {
                println!("{}", grid_line(columns, '├', '┼', '┤'));
            }
        }

        println!("{}", grid_line(columns, '└', '┴', '┘'));
    }

    fn turn_line(&self) -> colored::ColoredString {
        if self.controller.is_game_over() {
            return match self.controller.winner() {
                Some(Side::White) => "White wins!".bright_yellow(),
                Some(Side::Black) => "Black wins!".bright_green(),
                None => "Draw".bright_cyan(),
            };
        }
        match self.controller.current_side() {
            Some(Side::White) => "White's turn (O)".bright_yellow(),
            Some(Side::Black) => "Black's turn (X)".bright_green(),
            None => self.controller.status().normal(),
        }
    }
}

fn grid_line(columns: usize, left: char, mid: char, right: char) -> String {
    let segments = vec!["───"; columns].join(&mid.to_string());
    format!("    {left}{segments}{right}")
}
