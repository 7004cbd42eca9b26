//! Side (alliance) representation.

/// The two sides a piece can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Alliance {
    White = 0,
    Black = 1,
}

impl Alliance {
    /// Both alliances, White first.
    pub const ALL: [Alliance; 2] = [Alliance::White, Alliance::Black];

    /// Returns the opposing alliance.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Returns the tile offset of a single pawn advance (+8 for White, -8 for Black).
    #[inline]
    pub const fn pawn_advance(self) -> i8 {
        match self {
            Alliance::White => 8,
            Alliance::Black => -8,
        }
    }

    /// Returns the row pawns of this alliance start on (1 for White, 6 for Black).
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Alliance::White => 1,
            Alliance::Black => 6,
        }
    }

    /// Parses the FEN side-to-move field.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Alliance::White),
            'b' => Some(Alliance::Black),
            _ => None,
        }
    }

    /// Returns the FEN side-to-move character.
    #[inline]
    pub const fn to_fen_char(self) -> char {
        match self {
            Alliance::White => 'w',
            Alliance::Black => 'b',
        }
    }
}

impl std::fmt::Display for Alliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_alliance() {
        assert_eq!(Alliance::White.opposite(), Alliance::Black);
        assert_eq!(Alliance::Black.opposite(), Alliance::White);
    }

    #[test]
    fn pawn_geometry() {
        assert_eq!(Alliance::White.pawn_advance(), 8);
        assert_eq!(Alliance::Black.pawn_advance(), -8);
        assert_eq!(Alliance::White.pawn_start_row(), 1);
        assert_eq!(Alliance::Black.pawn_start_row(), 6);
    }

    #[test]
    fn fen_char() {
        assert_eq!(Alliance::from_fen_char('w'), Some(Alliance::White));
        assert_eq!(Alliance::from_fen_char('b'), Some(Alliance::Black));
        assert_eq!(Alliance::from_fen_char('x'), None);
        assert_eq!(Alliance::Black.to_fen_char(), 'b');
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Alliance::White), "White");
        assert_eq!(format!("{}", Alliance::Black), "Black");
    }
}
