//! Board representation.

use arbiter_core::{Color, Layout, LayoutError, Piece, PieceType, Position};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Piece order along each side's back row, column 1 first.
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of optional pieces.
///
/// Each square holds at most one piece and every piece sits on a square.
/// Cloning a board yields a fully independent copy.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Board::default()
    }

    /// Creates a board with the standard starting layout.
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.reset();
        board
    }

    /// Creates a board from parsed layout data.
    pub fn from_layout(layout: &Layout) -> Self {
        Board {
            squares: layout.squares,
        }
    }

    /// Returns this board as layout data.
    pub fn to_layout(&self) -> Layout {
        Layout {
            squares: self.squares,
        }
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize - 1][position.column() as usize - 1]
    }

    /// Puts a piece on a square, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, position: Position, piece: Piece) {
        self.squares[position.row() as usize - 1][position.column() as usize - 1] = Some(piece);
    }

    /// Clears a square, returning its previous occupant.
    #[inline]
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.squares[position.row() as usize - 1][position.column() as usize - 1].take()
    }

    /// Clears the board and sets up the 32 pieces of the standard layout.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        for color in Color::ALL {
            let back = color.back_row() as usize - 1;
            let pawns = color.pawn_start_row() as usize - 1;
            for (column, piece_type) in BACK_ROW.into_iter().enumerate() {
                self.squares[back][column] = Some(Piece::new(color, piece_type));
                self.squares[pawns][column] = Some(Piece::new(color, PieceType::Pawn));
            }
        }
    }

    /// Iterates over occupied squares, row 1 first.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| self.get(position).map(|p| (position, p)))
    }

    /// Scans the board for every square holding a piece of the given color.
    pub fn positions_of(&self, color: Color) -> Vec<Position> {
        self.iter()
            .filter(|(_, piece)| piece.color == color)
            .map(|(position, _)| position)
            .collect()
    }

    /// Returns the number of pieces of the given color and type.
    pub fn count(&self, piece: Piece) -> usize {
        self.iter().filter(|(_, p)| *p == piece).count()
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s).map(|layout| Board::from_layout(&layout))
    }
}

/// Renders the text layout, row 8 first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_layout().render())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for line in self.to_layout().render().lines() {
            writeln!(f, "    {}", line)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
