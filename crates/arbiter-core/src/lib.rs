//! Core types for chess rules.
//!
//! This crate provides the value types shared by the rules engine and the
//! applications built on it:
//! - [`Piece`], [`PieceType`], and [`Color`] for piece representation
//! - [`Position`] for 1-indexed board coordinates
//! - [`Move`] for move representation, including promotions
//! - [`Layout`] for the `|`-separated text board format
//!
//! All types serialize with serde so transport layers can carry them on
//! their own wire formats.

mod color;
mod layout;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use layout::{Layout, LayoutError};
pub use mov::Move;
pub use piece::{Piece, PieceType};
pub use position::{Position, PositionError};
