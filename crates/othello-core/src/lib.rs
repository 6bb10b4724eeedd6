pub mod board;
pub mod cell;
mod constants;
pub mod error;
pub mod eval;
mod flip;
pub mod level;
pub mod perft;
pub mod player;
pub mod search;
pub mod side;
pub mod turn_controller;
pub mod types;

pub use error::{Error, IllegalMoveReason, Result};
