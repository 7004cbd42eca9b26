//! Move generation.
//!
//! Moves are generated one piece at a time from the tile contents alone.
//! Dispatch is a `match` on [`PieceKind`]:
//! - knights and kings step through a fixed offset table,
//! - bishops, rooks and queens walk rays until blocked,
//! - pawns advance and capture forward for their alliance.
//!
//! Castling, en passant, promotion and king safety are not considered.

mod offsets;

use crate::{Board, Move};
use chess_core::{Alliance, Piece, PieceKind, Square};

/// A list of generated moves.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Upper bound on moves for a single piece (a queen in the centre).
    pub const MAX_PIECE_MOVES: usize = 27;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Creates an empty move list with room for `capacity` moves.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        MoveList {
            moves: Vec::with_capacity(capacity),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Appends every move of `other`.
    pub fn extend_from(&mut self, other: &MoveList) {
        self.moves.extend_from_slice(&other.moves);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the moves of the piece on `square`.
///
/// An empty tile yields an empty list.
pub fn generate_moves(board: &Board, square: Square) -> MoveList {
    let mut moves = MoveList::with_capacity(MoveList::MAX_PIECE_MOVES);

    if let Some(piece) = board.piece_at(square) {
        match piece.kind() {
            PieceKind::Pawn => generate_pawn_moves(board, piece, &mut moves),
            PieceKind::Knight => generate_step_moves(board, piece, &offsets::KNIGHT, &mut moves),
            PieceKind::Bishop => generate_ray_moves(board, piece, &offsets::BISHOP, &mut moves),
            PieceKind::Rook => generate_ray_moves(board, piece, &offsets::ROOK, &mut moves),
            PieceKind::Queen => generate_ray_moves(board, piece, &offsets::QUEEN, &mut moves),
            PieceKind::King => generate_step_moves(board, piece, &offsets::KING, &mut moves),
        }
    }

    moves
}

/// Generates the moves of every piece of `alliance`, in ascending square order.
pub fn generate_all(board: &Board, alliance: Alliance) -> MoveList {
    let mut moves = MoveList::new();
    for piece in board.pieces(alliance) {
        moves.extend_from(&generate_moves(board, piece.position()));
    }
    moves
}

/// Classifies a single target tile: quiet if empty, capture if held by the
/// other side, nothing if held by our own.
#[inline]
fn target_move(board: &Board, piece: &Piece, to: Square) -> Option<Move> {
    match board.piece_at(to) {
        None => Some(Move::quiet(*piece, to)),
        Some(occupant) => Move::capture(*piece, *occupant),
    }
}

/// Knight and king moves: one step per offset.
fn generate_step_moves(board: &Board, piece: &Piece, offsets: &[i8], moves: &mut MoveList) {
    for &offset in offsets {
        let Some(to) = piece.position().offset(offset) else {
            continue;
        };
        if let Some(m) = target_move(board, piece, to) {
            moves.push(m);
        }
    }
}

/// Bishop, rook and queen moves: walk each ray until the edge or a piece.
fn generate_ray_moves(board: &Board, piece: &Piece, directions: &[i8], moves: &mut MoveList) {
    for &direction in directions {
        let mut current = piece.position();
        while let Some(to) = current.offset(direction) {
            match board.piece_at(to) {
                None => moves.push(Move::quiet(*piece, to)),
                Some(occupant) => {
                    if let Some(capture) = Move::capture(*piece, *occupant) {
                        moves.push(capture);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

fn generate_pawn_moves(board: &Board, piece: &Piece, moves: &mut MoveList) {
    let alliance = piece.alliance();
    let from = piece.position();
    let advance = alliance.pawn_advance();

    // Pushes
    if let Some(single) = from.offset(advance).filter(|&sq| !board.is_occupied(sq)) {
        moves.push(Move::quiet(*piece, single));

        if from.row() == alliance.pawn_start_row() {
            if let Some(double) = single.offset(advance).filter(|&sq| !board.is_occupied(sq)) {
                moves.push(Move::quiet(*piece, double));
            }
        }
    }

    // Diagonal captures
    for side in [-1, 1] {
        let Some(to) = from.offset(advance + side) else {
            continue;
        };
        if let Some(m) = board
            .piece_at(to)
            .and_then(|occupant| Move::capture(*piece, *occupant))
        {
            moves.push(m);
        }
    }
}
