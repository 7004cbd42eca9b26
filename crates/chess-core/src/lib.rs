//! Core types for a tile-indexed chess board.
//!
//! This crate provides the fundamental types shared by the board model and
//! its callers:
//! - [`Alliance`], [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for tile coordinates
//! - [`geometry`] for index validity and edge-wrap exclusion
//! - FEN parsing and serialization

mod alliance;
mod fen;
pub mod geometry;
mod piece;
mod square;

pub use alliance::Alliance;
pub use fen::{decode_placement, encode_placement, FenError, FenParser, Placement};
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
