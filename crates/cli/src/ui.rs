//! Interactive play loop.

use othello_core::board::Board;
use othello_core::turn_controller::TurnEvent;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use crate::config::Config;
use crate::game::Game;
use crate::parse::{format_square, parse_square};

const HELP: &str = "\
Commands:
  <square>   play a move, e.g. d3
  moves      list legal moves
  reset      start a new game
  quit       leave";

pub fn ui_loop(config: &Config) -> othello_core::Result<()> {
    let board = Board::new(config.size, config.size)?;
    let size = board.rows();
    let mut game = Game::new(board, config.white, config.black);
    info!(white = %config.white, black = %config.black, size, "new game");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("Failed to open the line editor: {err}");
            return Ok(());
        }
    };

    println!("{HELP}");

    loop {
        let event = game.run_until_input(report)?;
        game.print();

        if event == TurnEvent::GameOver {
            println!("{}", game.controller().pieces());
            println!("Type 'reset' to play again or 'quit' to leave.");
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        };
        let _ = rl.add_history_entry(&line);

        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        match cmd {
            "quit" | "q" => break,
            "help" | "h" => println!("{HELP}"),
            "moves" | "m" => println!("{}", game.legal_moves_text()),
            "reset" | "r" => game.reset(),
            square => match parse_square(square, size) {
                Ok(_) if event == TurnEvent::GameOver => println!("The game is over."),
                Ok(coord) => {
                    if !game.play(coord) {
                        println!("Illegal move: {}", format_square(coord));
                    }
                }
                Err(err) => println!("{err}"),
            },
        }
    }

    Ok(())
}

fn report(event: TurnEvent) {
    match event {
        TurnEvent::Moved { side, row, col } => {
            println!("{side} plays {}", format_square((row, col)));
        }
        TurnEvent::Passed(side) => println!("{side} has no legal move and passes"),
        TurnEvent::AwaitingHuman(_) | TurnEvent::GameOver => {}
    }
}
