//! Game status reporting.

use arbiter_core::Color;
use serde::{Deserialize, Serialize};

/// Status of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The side to move is not in check and has a legal move.
    Ongoing,
    /// The given color is in check but can escape.
    Check(Color),
    /// The given color is in check with no legal move; it has lost.
    Checkmate(Color),
    /// The given color is not in check but has no legal move; the game is drawn.
    Stalemate(Color),
}

impl GameStatus {
    /// Returns true if no further moves can be made.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }

    /// Returns the winner, if the game ended in checkmate.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.opposite()),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(color) => write!(f, "{} is in check", color),
            GameStatus::Checkmate(color) => write!(f, "{} is checkmated", color),
            GameStatus::Stalemate(color) => write!(f, "{} is stalemated", color),
        }
    }
}
