//! Parsing helpers for move input.

use othello_core::types::Coord;

/// Widest board whose columns can be named with a single letter.
pub const MAX_BOARD_SIZE: usize = 26;

/// Parses a square in algebraic notation, e.g. `d3`.
///
/// The letter names the column (`a` = 0) and the number names the row
/// (`1` = 0). Both must fit on a board of `size` cells per side.
pub fn parse_square(input: &str, size: usize) -> Result<Coord, String> {
    let input = input.trim().to_ascii_lowercase();
    let mut chars = input.chars();

    let file = chars
        .next()
        .filter(char::is_ascii_lowercase)
        .ok_or_else(|| format!("Invalid square: '{input}'"))?;
    let col = file as usize - 'a' as usize;

    let row = chars
        .as_str()
        .parse::<usize>()
        .ok()
        .and_then(|rank| rank.checked_sub(1))
        .ok_or_else(|| format!("Invalid square: '{input}'"))?;

    if row >= size || col >= size {
        return Err(format!("Square '{input}' is off the board"));
    }
    Ok((row, col))
}

/// Returns the letter naming column `col`, or `None` past `z`.
pub fn column_name(col: usize) -> Option<char> {
    u8::try_from(col)
        .ok()
        .filter(|&col| usize::from(col) < MAX_BOARD_SIZE)
        .map(|col| char::from(b'a' + col))
}

/// Formats a coordinate in algebraic notation.
///
/// Columns without a letter fall back to `(row,col)`.
pub fn format_square((row, col): Coord) -> String {
    match column_name(col) {
        Some(file) => format!("{file}{}", row + 1),
        None => format!("({row},{col})"),
    }
}
