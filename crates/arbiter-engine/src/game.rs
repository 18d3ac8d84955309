//! Game state management: turn order, legality filtering, and check detection.
//!
//! The [`Game`] struct owns the authoritative board and provides:
//! - Legal move queries per square and per color
//! - Move validation and application with full rollback on rejection
//! - Check, checkmate, and stalemate detection
//! - Per-color indices of occupied squares, kept in step with the board

use crate::movegen::{self, en_passant_victim};
use crate::{Board, GameStatus};
use arbiter_core::{Color, Move, Piece, PieceType, Position};
use thiserror::Error;
use tracing::{debug, trace};

/// Reasons a move is rejected by [`Game::make_move`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {0} to move")]
    NoPiece(Position),

    #[error("it is {turn}'s turn, but the piece belongs to {piece}")]
    WrongTurn { turn: Color, piece: Color },

    #[error("{0} is not in the piece's move set")]
    NotInMoveSet(Move),

    #[error("{0} would capture a king")]
    CapturesKing(Move),

    #[error("{0} would leave the mover's king in check")]
    LeavesKingInCheck(Move),
}

/// Reasons a board is refused by [`Game::set_board`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },
}

/// A chess game in progress.
///
/// Besides the board and the side to move, a game keeps an index of the
/// squares each color occupies and the square of a pawn that may be
/// captured en passant on the coming move. The index is derived data: it
/// always matches a full scan of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Authoritative board.
    board: Board,
    /// The side to move.
    turn: Color,
    /// Occupied squares per color, indexed by [`Color::index`].
    pieces: [Vec<Position>; 2],
    /// Square of a pawn that has just advanced two squares.
    en_passant: Option<Position>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game with the standard layout and White to move.
    pub fn new() -> Self {
        let board = Board::standard();
        let pieces = Self::scan(&board);
        Game {
            board,
            turn: Color::White,
            pieces,
            en_passant: None,
        }
    }

    /// Creates a game from an arbitrary board and side to move.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, BoardError> {
        let mut game = Game::new();
        game.set_board(board)?;
        game.turn = turn;
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board and rebuilds the per-color indices from scratch.
    ///
    /// The side to move is kept; any en passant window is closed. Each side
    /// must have exactly one king, otherwise the game is left unchanged.
    pub fn set_board(&mut self, board: Board) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = board.count(Piece::new(color, PieceType::King));
            if count != 1 {
                return Err(BoardError::KingCount { color, count });
            }
        }

        self.pieces = Self::scan(&board);
        self.board = board;
        self.en_passant = None;
        debug!(
            white = self.pieces[Color::White.index()].len(),
            black = self.pieces[Color::Black.index()].len(),
            "board replaced"
        );
        Ok(())
    }

    /// Returns the game to the standard layout with White to move.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Returns the side to move.
    pub fn team_turn(&self) -> Color {
        self.turn
    }

    /// Sets the side to move.
    pub fn set_team_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Returns the square of the pawn capturable en passant this turn, if any.
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant
    }

    /// Returns the squares occupied by the given color.
    pub fn piece_positions(&self, color: Color) -> &[Position] {
        &self.pieces[color.index()]
    }

    /// Returns the legal moves of the piece on `position`, or `None` if the
    /// square is empty.
    ///
    /// This does not require it to be that piece's turn. Moves onto the enemy
    /// king are left out, like any other move [`make_move`](Game::make_move)
    /// would reject.
    pub fn valid_moves(&self, position: Position) -> Option<Vec<Move>> {
        let piece = self.board.get(position)?;
        let moves = movegen::piece_moves(&self.board, position, piece, self.en_passant)
            .into_iter()
            .filter(|&mv| match self.play(mv) {
                Ok(_) => true,
                Err(err) => {
                    trace!(%mv, %err, "candidate rejected");
                    false
                }
            })
            .collect();
        Some(moves)
    }

    /// Returns every legal move of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.turn)
    }

    /// Returns every legal move of the given color.
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.pieces[color.index()]
            .iter()
            .filter_map(|&position| self.valid_moves(position))
            .flatten()
            .collect()
    }

    /// Returns every pseudo-legal move of the given color, including those
    /// that would leave its king in check.
    pub fn pseudo_legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.pieces[color.index()]
            .iter()
            .flat_map(|&position| movegen::moves_from(&self.board, position, self.en_passant))
            .collect()
    }

    /// Makes a move for the side to move.
    ///
    /// On success the turn passes to the other side. On failure the game is
    /// left exactly as it was.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        match self.validate(mv) {
            Ok(next) => {
                let them = self.turn.opposite().index();
                let captured = next.pieces[them].len() < self.pieces[them].len();
                debug!(
                    %mv,
                    mover = %self.turn,
                    captured,
                    en_passant = ?next.en_passant,
                    "move applied"
                );
                *self = next;
                debug_assert!(self.index_matches_board());
                Ok(())
            }
            Err(err) => {
                debug!(%mv, %err, "move rejected");
                Err(err)
            }
        }
    }

    /// Returns true if the given color's king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_position(color) else {
            // Unreachable: boards are admitted with one king per side and no
            // move may capture a king.
            return false;
        };

        self.pieces[color.opposite().index()]
            .iter()
            .filter_map(|&position| self.board.get(position).map(|piece| (position, piece)))
            .any(|(position, piece)| {
                movegen::piece_moves(&self.board, position, piece, None)
                    .iter()
                    .any(|mv| mv.end == king)
            })
    }

    /// Returns true if the given color is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if the given color is not in check but has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(color)
    }

    /// Returns the status of the side to move.
    pub fn status(&self) -> GameStatus {
        let color = self.turn;
        let in_check = self.is_in_check(color);
        let status = match (in_check, self.has_legal_move(color)) {
            (true, false) => GameStatus::Checkmate(color),
            (false, false) => GameStatus::Stalemate(color),
            (true, true) => GameStatus::Check(color),
            (false, true) => GameStatus::Ongoing,
        };
        trace!(?status, "status queried");
        status
    }

    /// Returns true if any piece of `color` has a legal move.
    fn has_legal_move(&self, color: Color) -> bool {
        self.pieces[color.index()].iter().any(|&position| {
            self.valid_moves(position)
                .is_some_and(|moves| !moves.is_empty())
        })
    }

    fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceType::King);
        self.pieces[color.index()]
            .iter()
            .copied()
            .find(|&position| self.board.get(position) == Some(king))
    }

    /// Checks the turn and move-set preconditions, then plays the move.
    fn validate(&self, mv: Move) -> Result<Game, MoveError> {
        let piece = self.board.get(mv.start).ok_or(MoveError::NoPiece(mv.start))?;
        if piece.color != self.turn {
            return Err(MoveError::WrongTurn {
                turn: self.turn,
                piece: piece.color,
            });
        }
        if !movegen::piece_moves(&self.board, mv.start, piece, self.en_passant).contains(&mv) {
            return Err(MoveError::NotInMoveSet(mv));
        }
        self.play(mv)
    }

    /// Applies a move to a copy of this game and tests the mover's king.
    ///
    /// Returns the resulting game if the king is safe. `self` is never
    /// touched, so a rejected move needs no rollback.
    pub(crate) fn play(&self, mv: Move) -> Result<Game, MoveError> {
        let mut next = self.clone();
        let mover = next.apply(mv)?;
        if next.is_in_check(mover) {
            return Err(MoveError::LeavesKingInCheck(mv));
        }
        Ok(next)
    }

    /// Moves pieces and patches the indices, returning the mover's color.
    ///
    /// Flips the turn to the mover's opponent and opens an en passant window
    /// after a pawn double step.
    fn apply(&mut self, mv: Move) -> Result<Color, MoveError> {
        let piece = self.board.get(mv.start).ok_or(MoveError::NoPiece(mv.start))?;
        let us = piece.color;
        let them = us.opposite();

        match self.board.get(mv.end) {
            Some(captured) if captured.piece_type == PieceType::King => {
                return Err(MoveError::CapturesKing(mv));
            }
            Some(_) => remove_position(&mut self.pieces[them.index()], mv.end),
            None if piece.piece_type == PieceType::Pawn && mv.column_delta() != 0 => {
                if let Some(victim) = en_passant_victim(mv) {
                    self.board.remove(victim);
                    remove_position(&mut self.pieces[them.index()], victim);
                }
            }
            None => {}
        }

        self.board.remove(mv.start);
        let placed = mv.promotion.map_or(piece, |piece_type| piece.with_type(piece_type));
        self.board.place(mv.end, placed);

        let own = &mut self.pieces[us.index()];
        remove_position(own, mv.start);
        own.push(mv.end);

        self.turn = them;
        self.en_passant = (piece.piece_type == PieceType::Pawn && mv.row_delta().abs() == 2)
            .then_some(mv.end);
        Ok(us)
    }

    /// Builds both per-color indices by scanning all 64 squares.
    fn scan(board: &Board) -> [Vec<Position>; 2] {
        [board.positions_of(Color::White), board.positions_of(Color::Black)]
    }

    /// Returns true if the per-color indices match a full board scan.
    fn index_matches_board(&self) -> bool {
        let scanned = Self::scan(&self.board);
        Color::ALL.into_iter().all(|color| {
            let mut indexed = self.pieces[color.index()].clone();
            indexed.sort();
            indexed == scanned[color.index()]
        })
    }
}

/// Removes a square from an index, keeping the order of the rest.
fn remove_position(index: &mut Vec<Position>, position: Position) {
    if let Some(i) = index.iter().position(|&p| p == position) {
        index.remove(i);
    }
}
