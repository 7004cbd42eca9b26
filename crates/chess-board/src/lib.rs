//! Tile-based chess board with FEN round-tripping and move generation.
//!
//! This crate provides:
//! - [`Board`] - 64 [`Tile`]s built from a FEN string and serialized back
//! - [`Move`] - a quiet move or a capture, applied through [`Board::apply_move`]
//! - [`movegen`] - per-piece move generation with edge-wrap exclusion
//!
//! Search and evaluation live outside this crate; an engine sees the board
//! through [`Board::current_fen`] and answers with a move or a new FEN.
//!
//! # Example
//!
//! ```
//! use chess_board::Board;
//! use chess_core::Square;
//!
//! let mut board = Board::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! println!("Pawn on e2 can reach {} tiles", board.legal_moves(e2).len());
//!
//! board.apply_uci("e2e4").unwrap();
//! assert_eq!(
//!     board.current_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1"
//! );
//! ```

mod board;
mod error;
mod mov;
pub mod movegen;
mod tile;

pub use board::Board;
pub use error::BoardError;
pub use mov::{parse_uci, Move};
pub use movegen::{generate_all, generate_moves, MoveList};
pub use tile::Tile;
