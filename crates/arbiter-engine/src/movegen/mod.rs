//! Pseudo-legal move generation.
//!
//! Each piece's moves follow from its geometry and the occupancy of the
//! board alone. Nothing here looks at whose turn it is or whether a move
//! leaves the mover's king attacked; [`Game`](crate::Game) filters for that.

use crate::Board;
use arbiter_core::{Color, Move, Piece, PieceType, Position};

/// Diagonal ray directions as (row, column) deltas.
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Orthogonal ray directions as (row, column) deltas.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Knight jumps as (row, column) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King steps as (row, column) deltas.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Generates the pseudo-legal moves of `piece` standing on `from`.
///
/// `en_passant` is the square of a pawn that has just advanced two squares,
/// if any. A pawn of the other color beside it may capture onto the empty
/// square behind it.
pub fn piece_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    en_passant: Option<Position>,
) -> Vec<Move> {
    let mut moves = Vec::new();
    match piece.piece_type {
        PieceType::Bishop => {
            slider_moves(board, from, piece.color, &BISHOP_DIRECTIONS, &mut moves)
        }
        PieceType::Rook => slider_moves(board, from, piece.color, &ROOK_DIRECTIONS, &mut moves),
        PieceType::Queen => {
            slider_moves(board, from, piece.color, &BISHOP_DIRECTIONS, &mut moves);
            slider_moves(board, from, piece.color, &ROOK_DIRECTIONS, &mut moves);
        }
        PieceType::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceType::King => step_moves(board, from, piece.color, &KING_OFFSETS, &mut moves),
        PieceType::Pawn => pawn_moves(board, from, piece.color, en_passant, &mut moves),
    }
    moves
}

/// Generates the pseudo-legal moves of whatever piece stands on `from`.
///
/// Returns an empty list for an empty square.
pub fn moves_from(board: &Board, from: Position, en_passant: Option<Position>) -> Vec<Move> {
    board
        .get(from)
        .map(|piece| piece_moves(board, from, piece, en_passant))
        .unwrap_or_default()
}

/// Walks each ray until it leaves the board or meets a piece.
///
/// An enemy piece ends the ray with a capture; a friendly one ends it without.
fn slider_moves(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_column) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_column) {
            match board.get(to) {
                None => moves.push(Move::normal(from, to)),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Single-step moves to fixed offsets, skipping squares held by friendly pieces.
fn step_moves(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_column) in offsets {
        let Some(to) = from.offset(d_row, d_column) else {
            continue;
        };
        match board.get(to) {
            Some(occupant) if occupant.color == color => {}
            _ => moves.push(Move::normal(from, to)),
        }
    }
}

fn pawn_moves(
    board: &Board,
    from: Position,
    color: Color,
    en_passant: Option<Position>,
    moves: &mut Vec<Move>,
) {
    let direction = color.pawn_direction();

    // Pushes
    if let Some(one) = from.offset(direction, 0) {
        if board.get(one).is_none() {
            push_pawn_move(from, one, color, moves);

            if from.row() == color.pawn_start_row() {
                if let Some(two) = one.offset(direction, 0) {
                    if board.get(two).is_none() {
                        moves.push(Move::normal(from, two));
                    }
                }
            }
        }
    }

    // Captures
    for d_column in [-1, 1] {
        let Some(to) = from.offset(direction, d_column) else {
            continue;
        };
        match board.get(to) {
            Some(occupant) if occupant.color != color => push_pawn_move(from, to, color, moves),
            Some(_) => {}
            None => {
                if is_en_passant_capture(board, from, to, color, en_passant) {
                    moves.push(Move::normal(from, to));
                }
            }
        }
    }
}

/// Adds a pawn move, expanded into one move per promotion choice when it
/// lands on the promoting row.
fn push_pawn_move(from: Position, to: Position, color: Color, moves: &mut Vec<Move>) {
    if to.row() == color.promotion_row() {
        for piece_type in PieceType::PROMOTIONS {
            moves.push(Move::promoting(from, to, piece_type));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}

/// Returns true if a `color` pawn on `from` may capture en passant onto `to`.
///
/// The double-stepped pawn must stand beside `from`, on the column of `to`,
/// and belong to the other color.
fn is_en_passant_capture(
    board: &Board,
    from: Position,
    to: Position,
    color: Color,
    en_passant: Option<Position>,
) -> bool {
    let Some(target) = en_passant else {
        return false;
    };
    target.row() == from.row()
        && target.column() == to.column()
        && board.get(target) == Some(Piece::new(color.opposite(), PieceType::Pawn))
}

/// Returns the square of the pawn captured by an en passant `mv`.
///
/// Valid only for a diagonal pawn move onto an empty square, which can only
/// be an en passant capture.
#[inline]
pub(crate) fn en_passant_victim(mv: Move) -> Option<Position> {
    Position::new(mv.start.row(), mv.end.column()).ok()
}
