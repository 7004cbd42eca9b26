//! Board tiles.

use chess_core::{Piece, Square};

/// One of the 64 board squares and whatever stands on it.
///
/// A tile's square is fixed at construction. Changing what stands on a
/// square means building a new tile for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    square: Square,
    piece: Option<Piece>,
}

impl Tile {
    /// Creates an unoccupied tile.
    #[inline]
    pub const fn empty(square: Square) -> Self {
        Tile {
            square,
            piece: None,
        }
    }

    /// Creates a tile holding `piece` on the piece's own square.
    #[inline]
    pub const fn occupied(piece: Piece) -> Self {
        Tile {
            square: piece.position(),
            piece: Some(piece),
        }
    }

    /// Creates a tile for `square` from an optional piece.
    ///
    /// A piece recorded on another square is relocated to `square`.
    #[inline]
    pub fn new(square: Square, piece: Option<Piece>) -> Self {
        Tile {
            square,
            piece: piece.map(|p| p.moved_to(square)),
        }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    #[inline]
    pub const fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Alliance, PieceKind};

    #[test]
    fn empty_tile() {
        let e1 = Square::from_algebraic("e1").unwrap();
        let tile = Tile::empty(e1);
        assert!(!tile.is_occupied());
        assert_eq!(tile.piece(), None);
        assert_eq!(tile.square(), e1);
    }

    #[test]
    fn occupied_tile_uses_piece_square() {
        let e8 = Square::from_algebraic("e8").unwrap();
        let king = Piece::new(e8, PieceKind::King, Alliance::Black);
        let tile = Tile::occupied(king);
        assert!(tile.is_occupied());
        assert_eq!(tile.square(), e8);
        assert_eq!(tile.piece(), Some(&king));
    }

    #[test]
    fn new_relocates_piece() {
        let rook = Piece::new(Square::A1, PieceKind::Rook, Alliance::White);
        let tile = Tile::new(Square::H1, Some(rook));
        assert_eq!(tile.piece().map(|p| p.position()), Some(Square::H1));
    }
}
