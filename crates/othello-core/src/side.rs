use std::fmt;

/// Represents one of the two competing colors.
///
/// The `Side` enum has two variants:
///
/// * `White` - The side that moves first.
/// * `Black` - The side that moves second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Converts the side to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'O'` for `Side::White`
    /// * `'X'` for `Side::Black`
    pub fn to_char(self) -> char {
        match self {
            Side::White => 'O',
            Side::Black => 'X',
        }
    }

    /// Parses a side from its character representation.
    pub fn from_char(c: char) -> Option<Side> {
        match c {
            'O' | 'o' => Some(Side::White),
            'X' | 'x' => Some(Side::Black),
            _ => None,
        }
    }

    /// Returns the opposite side.
    ///
    /// # Returns
    ///
    /// * `Side::Black` for `Side::White`
    /// * `Side::White` for `Side::Black`
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Index of the side in per-side tables (`White` = 0, `Black` = 1).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}
