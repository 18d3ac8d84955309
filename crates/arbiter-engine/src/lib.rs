//! Chess rules arbiter.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of pieces with the standard layout and text form
//! - [`movegen`] - pseudo-legal move geometry for every piece type
//! - [`Game`] - turn order, legality filtering, check, checkmate, and stalemate
//! - [`GameConfig`] - TOML game setups
//! - [`perft()`] - leaf-node counts for validating move generation
//!
//! # Architecture
//!
//! Move geometry knows nothing about turns or king safety. The game asks it
//! for candidate moves, plays each candidate on a copy of itself, and keeps
//! only those that leave the mover's king unattacked. The same
//! play-then-test step backs both [`Game::valid_moves`] and
//! [`Game::make_move`], so a rejected move never touches the real game.
//!
//! # Example
//!
//! ```
//! use arbiter_core::{Color, Move, Position};
//! use arbiter_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let e2 = Position::new(2, 5)?;
//! let e4 = Position::new(4, 5)?;
//! game.make_move(Move::normal(e2, e4))?;
//! assert_eq!(game.team_turn(), Color::Black);
//! assert_eq!(game.en_passant_target(), Some(e4));
//! assert_eq!(game.status(), GameStatus::Ongoing);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod board;
mod config;
mod game;
pub mod movegen;
pub mod perft;
mod status;

pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game::{BoardError, Game, MoveError};
pub use perft::{perft, perft_divide};
pub use status::GameStatus;
