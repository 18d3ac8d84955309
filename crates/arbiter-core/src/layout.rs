//! Text board layout parsing and rendering.
//!
//! A layout is eight rows, row 8 first, each written as eight cells framed
//! and separated by `|`:
//!
//! ```text
//! |r|n|b|q|k|b|n|r|
//! |p|p|p|p|p|p|p|p|
//! | | | | | | | | |
//! | | | | | | | | |
//! | | | | | | | | |
//! | | | | | | | | |
//! |P|P|P|P|P|P|P|P|
//! |R|N|B|Q|K|B|N|R|
//! ```
//!
//! A cell is a single space (empty) or a piece letter from `pnbrqk`,
//! uppercase for White and lowercase for Black.

use crate::{Piece, Position};
use thiserror::Error;

/// Errors that can occur when parsing a text layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid layout: row {row} is not framed by '|': {line:?}")]
    UnframedRow { row: u8, line: String },

    #[error("invalid layout: row {row} has {count} cells, expected 8")]
    InvalidCellCount { row: u8, count: usize },

    #[error("invalid layout: row {row}, column {column} has malformed cell {cell:?}")]
    MalformedCell { row: u8, column: u8, cell: String },

    #[error("invalid layout: row {row}, column {column} has unknown piece '{piece}'")]
    UnknownPiece { row: u8, column: u8, piece: char },
}

/// Parsed layout data.
///
/// Holds the square contents read from a text layout. The engine's board
/// converts this into its own representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    /// Square contents indexed `[row - 1][column - 1]`.
    pub squares: [[Option<Piece>; 8]; 8],
}

impl Layout {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "\
|r|n|b|q|k|b|n|r|
|p|p|p|p|p|p|p|p|
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
| | | | | | | | |
|P|P|P|P|P|P|P|P|
|R|N|B|Q|K|B|N|R|
";

    /// Parses a text layout.
    ///
    /// A single trailing newline is accepted, as are `\r\n` line endings.
    /// Both are normalized away: [`render`](Layout::render) always writes
    /// `\n` after every row, so only that form renders back unchanged.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        if lines.len() != 8 {
            return Err(LayoutError::InvalidRowCount(lines.len()));
        }

        let mut layout = Layout::default();
        for (i, line) in lines.iter().enumerate() {
            let row = 8 - i as u8;
            layout.squares[row as usize - 1] = Self::parse_row(row, line)?;
        }
        Ok(layout)
    }

    fn parse_row(row: u8, line: &str) -> Result<[Option<Piece>; 8], LayoutError> {
        let inner = line
            .strip_prefix('|')
            .and_then(|rest| rest.strip_suffix('|'))
            .ok_or_else(|| LayoutError::UnframedRow {
                row,
                line: line.to_string(),
            })?;

        let cells: Vec<&str> = inner.split('|').collect();
        if cells.len() != 8 {
            return Err(LayoutError::InvalidCellCount {
                row,
                count: cells.len(),
            });
        }

        let mut squares = [None; 8];
        for (j, cell) in cells.iter().enumerate() {
            let column = j as u8 + 1;
            let mut chars = cell.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(LayoutError::MalformedCell {
                        row,
                        column,
                        cell: cell.to_string(),
                    })
                }
            };
            if c == ' ' {
                continue;
            }
            squares[j] = Some(
                Piece::from_char(c).ok_or(LayoutError::UnknownPiece {
                    row,
                    column,
                    piece: c,
                })?,
            );
        }
        Ok(squares)
    }

    /// Returns the piece at the given position, if any.
    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize - 1][position.column() as usize - 1]
    }

    /// Renders the layout as text, row 8 first, each row ending in a newline.
    pub fn render(&self) -> String {
        let mut text = String::with_capacity(8 * 18);
        for row in self.squares.iter().rev() {
            for square in row {
                text.push('|');
                text.push(square.map_or(' ', Piece::to_char));
            }
            text.push_str("|\n");
        }
        text
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
