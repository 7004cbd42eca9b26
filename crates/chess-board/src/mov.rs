//! Move representation.

use chess_core::{Piece, Square};
use std::fmt;

/// A proposed transition of one piece, not yet applied.
///
/// Moves carry copies of the pieces involved rather than references into
/// the board, so a move outlives the board state it was generated from.
/// [`Board::apply_move`](crate::Board::apply_move) re-checks that state
/// before committing.
///
/// Moves are only built by the move generator, which never produces one
/// that lands on a piece of the mover's own alliance.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// A move onto an empty tile.
    Quiet { piece: Piece, to: Square },
    /// A move onto a tile held by an opposing piece, which is removed.
    Capture {
        piece: Piece,
        to: Square,
        captured: Piece,
    },
}

impl Move {
    #[inline]
    pub(crate) const fn quiet(piece: Piece, to: Square) -> Self {
        Move::Quiet { piece, to }
    }

    /// Returns `None` when `captured` belongs to the mover's alliance.
    #[inline]
    pub(crate) fn capture(piece: Piece, captured: Piece) -> Option<Self> {
        (piece.alliance() != captured.alliance()).then_some(Move::Capture {
            piece,
            to: captured.position(),
            captured,
        })
    }

    /// Returns the moving piece as it stands before the move.
    #[inline]
    pub const fn piece(&self) -> &Piece {
        match self {
            Move::Quiet { piece, .. } | Move::Capture { piece, .. } => piece,
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(&self) -> Square {
        self.piece().position()
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(&self) -> Square {
        match self {
            Move::Quiet { to, .. } | Move::Capture { to, .. } => *to,
        }
    }

    /// Returns the captured piece, if any.
    #[inline]
    pub const fn captured(&self) -> Option<&Piece> {
        match self {
            Move::Quiet { .. } => None,
            Move::Capture { captured, .. } => Some(captured),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Move::Capture { .. })
    }

    /// Returns the moving piece relocated to the destination.
    #[inline]
    pub const fn moved_piece(&self) -> Piece {
        self.piece().moved_to(self.to())
    }

    /// Returns coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from(), self.to())
    }
}

/// Parses coordinate notation ("e2e4") into source and destination squares.
///
/// A trailing promotion letter is accepted and ignored, since promotion is
/// not modelled; engines append one when a pawn reaches the last rank.
pub fn parse_uci(s: &str) -> Option<(Square, Square)> {
    if s.len() < 4 || s.len() > 5 || !s.is_ascii() {
        return None;
    }
    let from = Square::from_algebraic(&s[0..2])?;
    let to = Square::from_algebraic(&s[2..4])?;
    if s.len() == 5 && !matches!(s.as_bytes()[4].to_ascii_lowercase(), b'n' | b'b' | b'r' | b'q') {
        return None;
    }
    Some((from, to))
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Quiet { .. } => write!(f, "Quiet({})", self.to_uci()),
            Move::Capture { captured, .. } => {
                write!(f, "Capture({}x{})", self.to_uci(), captured.to_fen_char())
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
