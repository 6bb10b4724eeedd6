//! Command-line configuration for the terminal front end.

use clap::Parser;
use othello_core::level::Level;
use othello_core::player::PlayerKind;

use crate::parse::MAX_BOARD_SIZE;

/// Play Othello in the terminal against a friend or the computer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Config {
    /// Who plays White: `human`, `computer` or `computer:<depth>`
    #[arg(long, default_value = "human")]
    pub white: PlayerKind,

    /// Who plays Black: `human`, `computer` or `computer:<depth>`
    #[arg(long, default_value_t = PlayerKind::Computer(Level::THREE))]
    pub black: PlayerKind,

    /// Board side length (even, 4 to 26)
    #[arg(long, default_value_t = 8, value_parser = parse_size)]
    pub size: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

const MIN_SIZE: usize = 4;

/// Accepts sizes whose columns can all be named `a` to `z`.
fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !(MIN_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(format!(
            "board size must be between {MIN_SIZE} and {MAX_BOARD_SIZE}"
        ));
    }
    Ok(size)
}
