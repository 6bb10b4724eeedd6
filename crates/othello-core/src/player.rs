//! Player configuration.

use std::fmt;
use std::str::FromStr;

use crate::level::Level;

/// Who controls a side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves arrive from outside through `attempt_move`.
    Human,
    /// Moves are chosen by a minimax search of the given strength.
    Computer(Level),
}

impl PlayerKind {
    #[inline]
    pub fn is_human(self) -> bool {
        matches!(self, PlayerKind::Human)
    }

    /// Returns the search level for computer players.
    pub fn level(self) -> Option<Level> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Computer(level) => Some(level),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Computer(level) => write!(f, "computer:{level}"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    /// Parses `human`, `computer` or `computer:<depth>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.split_once(':') {
            None if s == "human" => Ok(PlayerKind::Human),
            None if s == "computer" => Ok(PlayerKind::Computer(Level::default())),
            Some(("computer", depth)) => {
                let depth = depth
                    .parse::<u32>()
                    .map_err(|e| format!("Invalid search depth '{depth}': {e}"))?;
                Level::new(depth)
                    .map(PlayerKind::Computer)
                    .map_err(|e| e.to_string())
            }
            _ => Err(format!(
                "Invalid player '{s}': expected 'human', 'computer' or 'computer:<depth>'"
            )),
        }
    }
}
