//! Chess piece representation.

use crate::{Alliance, Square};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Returns the FEN character for this kind with the given alliance.
    pub const fn to_fen_char(self, alliance: Alliance) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match alliance {
            Alliance::White => c.to_ascii_uppercase(),
            Alliance::Black => c,
        }
    }

    /// Parses a FEN character into a kind and alliance.
    ///
    /// Uppercase letters are White, lowercase Black.
    pub const fn from_fen_char(c: char) -> Option<(PieceKind, Alliance)> {
        let alliance = if c.is_ascii_uppercase() {
            Alliance::White
        } else {
            Alliance::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, alliance))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on a particular square.
///
/// Pieces are values: moving one produces a new `Piece` at the destination
/// (see [`Piece::moved_to`]) rather than updating the position in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    position: Square,
    kind: PieceKind,
    alliance: Alliance,
}

impl Piece {
    /// Creates a piece of `kind` and `alliance` standing on `position`.
    #[inline]
    pub const fn new(position: Square, kind: PieceKind, alliance: Alliance) -> Self {
        Piece {
            position,
            kind,
            alliance,
        }
    }

    /// Creates a piece from its FEN letter.
    pub const fn from_fen_char(position: Square, c: char) -> Option<Self> {
        match PieceKind::from_fen_char(c) {
            Some((kind, alliance)) => Some(Piece::new(position, kind, alliance)),
            None => None,
        }
    }

    #[inline]
    pub const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// Returns the FEN letter for this piece.
    #[inline]
    pub const fn to_fen_char(&self) -> char {
        self.kind.to_fen_char(self.alliance)
    }

    /// Returns the same piece relocated to `position`.
    #[inline]
    pub const fn moved_to(&self, position: Square) -> Self {
        Piece::new(position, self.kind, self.alliance)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} on {}", self.alliance, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_to_fen() {
        assert_eq!(PieceKind::Pawn.to_fen_char(Alliance::White), 'P');
        assert_eq!(PieceKind::Pawn.to_fen_char(Alliance::Black), 'p');
        assert_eq!(PieceKind::King.to_fen_char(Alliance::White), 'K');
        assert_eq!(PieceKind::Knight.to_fen_char(Alliance::Black), 'n');
    }

    #[test]
    fn kind_from_fen() {
        assert_eq!(
            PieceKind::from_fen_char('P'),
            Some((PieceKind::Pawn, Alliance::White))
        );
        assert_eq!(
            PieceKind::from_fen_char('p'),
            Some((PieceKind::Pawn, Alliance::Black))
        );
        assert_eq!(
            PieceKind::from_fen_char('K'),
            Some((PieceKind::King, Alliance::White))
        );
        assert_eq!(PieceKind::from_fen_char('x'), None);
        assert_eq!(PieceKind::from_fen_char('9'), None);
    }

    #[test]
    fn moved_to_keeps_identity() {
        let rook = Piece::from_fen_char(Square::A1, 'R').unwrap();
        let moved = rook.moved_to(Square::A8);
        assert_eq!(moved.kind(), PieceKind::Rook);
        assert_eq!(moved.alliance(), Alliance::White);
        assert_eq!(moved.position(), Square::A8);
        assert_eq!(rook.position(), Square::A1);
    }

    #[test]
    fn display() {
        let king = Piece::new(Square::from_algebraic("e8").unwrap(), PieceKind::King, Alliance::Black);
        assert_eq!(king.to_string(), "Black King on e8");
        assert_eq!(king.to_fen_char(), 'k');
    }
}
