//! Move representation.

use crate::{PieceType, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move from one square to another.
///
/// `promotion` is set only for pawn moves that land on the promoting row;
/// it names the piece the pawn becomes. Moves compare equal when all three
/// fields match, so a knight promotion and a queen promotion on the same
/// squares are different moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    #[serde(default)]
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Creates a move with an optional promotion piece.
    #[inline]
    pub const fn new(start: Position, end: Position, promotion: Option<PieceType>) -> Self {
        Move {
            start,
            end,
            promotion,
        }
    }

    /// Creates a non-promoting move.
    #[inline]
    pub const fn normal(start: Position, end: Position) -> Self {
        Self::new(start, end, None)
    }

    /// Creates a promoting move.
    #[inline]
    pub const fn promoting(start: Position, end: Position, piece_type: PieceType) -> Self {
        Self::new(start, end, Some(piece_type))
    }

    /// Returns true if this move promotes a pawn.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns the signed row distance covered by this move.
    #[inline]
    pub const fn row_delta(self) -> i8 {
        self.end.row() as i8 - self.start.row() as i8
    }

    /// Returns the signed column distance covered by this move.
    #[inline]
    pub const fn column_delta(self) -> i8 {
        self.end.column() as i8 - self.start.column() as i8
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

/// Coordinate form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if let Some(piece_type) = self.promotion {
            write!(f, "{}", piece_type.to_char())?;
        }
        Ok(())
    }
}
