//! Board coordinate representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a coordinate falls outside the 8x8 board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    #[error("position ({row}, {column}) is off the board: row and column must be in 1..=8")]
    OutOfRange { row: u8, column: u8 },
}

/// A square on the board, addressed by 1-indexed row and column.
///
/// Row 1 is White's back row and row 8 is Black's; column 1 is the a-file.
/// A `Position` can only be built in range, so anything holding one may
/// index the board without further checks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Creates a position, failing if either coordinate is outside `1..=8`.
    pub const fn new(row: u8, column: u8) -> Result<Self, PositionError> {
        if row >= 1 && row <= 8 && column >= 1 && column <= 8 {
            Ok(Position { row, column })
        } else {
            Err(PositionError::OutOfRange { row, column })
        }
    }

    /// Returns the row (1-8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (1-8).
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the position shifted by the given deltas, or `None` if that
    /// leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_column;
        if row >= 1 && row <= 8 && column >= 1 && column <= 8 {
            Some(Position {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 positions, row 1 first, column 1 first within a row.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |column| Position { row, column }))
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((row, column): (u8, u8)) -> Result<Self, Self::Error> {
        Position::new(row, column)
    }
}

impl From<Position> for (u8, u8) {
    fn from(position: Position) -> Self {
        (position.row, position.column)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column - 1) as char, self.row)
    }
}
