//! The 64-tile board.

use std::fmt;

use chess_core::geometry::NUM_TILES;
use chess_core::{decode_placement, encode_placement, Alliance, FenParser, Piece, Placement, Square};
use tracing::debug;

use crate::movegen::{generate_all, generate_moves};
use crate::mov::parse_uci;
use crate::{BoardError, Move, MoveList, Tile};

/// A chess board of 64 tiles plus the FEN it was last built from.
///
/// The board field of the stored FEN always matches the tiles: it is
/// rebuilt whenever a move is applied. The other FEN fields (side to move,
/// castling, en passant, clocks) are validated on input and carried through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; NUM_TILES],
    fen: FenParser,
}

impl Board {
    /// Creates the standard starting position.
    pub fn new() -> Self {
        Self::from_fen(FenParser::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let (fen, placement) = Self::decode(fen)?;
        Ok(Board {
            tiles: Self::build_tiles(&placement),
            fen,
        })
    }

    /// Rebuilds every tile from a FEN string.
    ///
    /// On error the board keeps its previous contents.
    pub fn apply_fen(&mut self, fen: &str) -> Result<(), BoardError> {
        let (fen, placement) = Self::decode(fen).inspect_err(|e| {
            debug!(error = %e, "rejected encoding");
        })?;
        self.tiles = Self::build_tiles(&placement);
        self.fen = fen;
        debug!(fen = %self.current_fen(), "board rebuilt");
        Ok(())
    }

    fn decode(fen: &str) -> Result<(FenParser, Placement), BoardError> {
        let parsed = FenParser::parse(fen)?;
        let placement = decode_placement(&parsed.piece_placement)?;
        Ok((parsed, placement))
    }

    fn build_tiles(placement: &Placement) -> [Tile; NUM_TILES] {
        let mut tiles = [Tile::empty(Square::H1); NUM_TILES];
        for sq in Square::all() {
            tiles[sq.index()] = Tile::new(sq, placement[sq.index()]);
        }
        tiles
    }

    /// Returns the tile at `index`.
    pub fn tile_at(&self, index: usize) -> Result<&Tile, BoardError> {
        self.tiles
            .get(index)
            .ok_or(BoardError::OutOfRangeIndex(index))
    }

    /// Returns the tile for `square`.
    #[inline]
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.index()]
    }

    /// Returns all 64 tiles in index order.
    #[inline]
    pub fn tiles(&self) -> &[Tile; NUM_TILES] {
        &self.tiles
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.tile(square).is_occupied()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.tile(square).piece()
    }

    /// Iterates over the pieces of `alliance` in ascending square order.
    pub fn pieces(&self, alliance: Alliance) -> impl Iterator<Item = &Piece> + '_ {
        self.tiles
            .iter()
            .filter_map(Tile::piece)
            .filter(move |p| p.alliance() == alliance)
    }

    /// Returns the side to move as recorded in the FEN.
    #[inline]
    pub fn side_to_move(&self) -> Alliance {
        self.fen.active_color
    }

    /// Returns the FEN fields the board carries.
    #[inline]
    pub fn fen(&self) -> &FenParser {
        &self.fen
    }

    /// Returns the FEN for the current tiles.
    pub fn current_fen(&self) -> String {
        self.fen.to_fen()
    }

    /// Returns the moves of the piece on `square`.
    pub fn legal_moves(&self, square: Square) -> MoveList {
        generate_moves(self, square)
    }

    /// Returns the moves of every piece of `alliance`.
    pub fn all_moves(&self, alliance: Alliance) -> MoveList {
        generate_all(self, alliance)
    }

    /// Finds the generated move from `from` to `to`, if there is one.
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        generate_moves(self, from).into_iter().find(|m| m.to() == to)
    }

    /// Applies a move generated from this board.
    ///
    /// The move is checked against the current tiles first: the source must
    /// still hold the moving piece and the move must still be generated from
    /// it. A move built against an earlier state is rejected with
    /// [`BoardError::IllegalMoveRequest`] and the board is left untouched.
    pub fn apply_move(&mut self, m: &Move) -> Result<(), BoardError> {
        if self.piece_at(m.from()) != Some(m.piece()) {
            debug!(mv = %m, "source no longer holds the moving piece");
            return Err(BoardError::IllegalMoveRequest(format!(
                "{} does not hold {}",
                m.from(),
                m.piece()
            )));
        }
        if !self.legal_moves(m.from()).iter().any(|g| g == m) {
            debug!(mv = %m, "move is not available in the current position");
            return Err(BoardError::IllegalMoveRequest(format!(
                "{} is not available in the current position",
                m
            )));
        }

        self.tiles[m.from().index()] = Tile::empty(m.from());
        self.tiles[m.to().index()] = Tile::occupied(m.moved_piece());
        self.fen.piece_placement = encode_placement(&self.placement());
        Ok(())
    }

    /// Resolves coordinate notation ("e2e4") against the generated moves and
    /// applies the result.
    pub fn apply_uci(&mut self, text: &str) -> Result<Move, BoardError> {
        let (from, to) = parse_uci(text)
            .ok_or_else(|| BoardError::IllegalMoveRequest(format!("unreadable move '{}'", text)))?;
        let m = self
            .find_move(from, to)
            .ok_or_else(|| BoardError::IllegalMoveRequest(format!("no move {}", text)))?;
        self.apply_move(&m)?;
        Ok(m)
    }

    fn placement(&self) -> Placement {
        let mut placement: Placement = [None; NUM_TILES];
        for (slot, tile) in placement.iter_mut().zip(self.tiles.iter()) {
            *slot = tile.piece().copied();
        }
        placement
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for column in (0..8).rev() {
                let c = self.tiles[row * 8 + column]
                    .piece()
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{FenError, PieceKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_fen_roundtrip() {
        let board = Board::new();
        assert_eq!(board.current_fen(), FenParser::STARTPOS);
    }

    #[test]
    fn custom_fen_roundtrip() {
        let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.current_fen(), fen);
    }

    #[test]
    fn metadata_is_preserved() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b Kq e3 7 42";
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(board.side_to_move(), Alliance::Black);
        assert_eq!(board.fen().castling, "Kq");
        assert_eq!(board.fen().en_passant, "e3");
        assert_eq!(board.current_fen(), fen);
    }

    #[test]
    fn clock_text_survives_rebuild_and_moves() {
        let fen = "8/8/8/8/8/8/8/8 w - - +0 01";
        assert_eq!(Board::from_fen(fen).unwrap().current_fen(), fen);

        let mut board = Board::from_fen("8/8/8/8/8/8/8/K7 w - - 007 +3").unwrap();
        board.apply_uci("a1a2").unwrap();
        assert_eq!(board.current_fen(), "8/8/8/8/8/8/K7/8 w - - 007 +3");
    }

    #[test]
    fn tile_at_checks_range() {
        let board = Board::new();
        assert_eq!(board.tile_at(63).unwrap().square(), Square::A8);
        assert_eq!(board.tile_at(64), Err(BoardError::OutOfRangeIndex(64)));
    }

    #[test]
    fn piece_queries() {
        let board = Board::new();
        assert!(board.is_occupied(sq("e1")));
        assert!(!board.is_occupied(sq("e4")));
        let king = board.piece_at(sq("e8")).unwrap();
        assert_eq!(king.kind(), PieceKind::King);
        assert_eq!(king.alliance(), Alliance::Black);
        assert_eq!(board.pieces(Alliance::White).count(), 16);
        assert!(board.pieces(Alliance::White).all(|p| p.position().row() < 2));
    }

    #[test]
    fn apply_fen_replaces_contents() {
        let mut board = Board::new();
        board.apply_fen(FenParser::EMPTY).unwrap();
        assert!(board.tiles().iter().all(|t| !t.is_occupied()));
        assert_eq!(board.current_fen(), FenParser::EMPTY);
    }

    #[test]
    fn apply_fen_failure_leaves_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();
        let err = board.apply_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1");
        assert!(matches!(
            err,
            Err(BoardError::MalformedEncoding(FenError::InvalidPiecePlacement(_)))
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn apply_quiet_move() {
        let mut board = Board::new();
        let m = board.find_move(sq("g1"), sq("f3")).unwrap();
        board.apply_move(&m).unwrap();

        assert!(!board.is_occupied(sq("g1")));
        let knight = board.piece_at(sq("f3")).unwrap();
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.position(), sq("f3"));
        assert_eq!(
            board.current_fen(),
            "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R w KQkq - 0 1"
        );
    }

    #[test]
    fn apply_capture_move() {
        let mut board = Board::from_fen("8/8/8/3p4/4P3/8/8/8 w - - 0 1").unwrap();
        let m = board.find_move(sq("e4"), sq("d5")).unwrap();
        assert!(m.is_capture());
        board.apply_move(&m).unwrap();
        assert_eq!(board.pieces(Alliance::Black).count(), 0);
        assert_eq!(board.current_fen(), "8/8/8/3P4/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn stale_move_is_rejected() {
        let mut board = Board::new();
        let m = board.find_move(sq("e2"), sq("e4")).unwrap();
        board.apply_move(&m).unwrap();
        let before = board.clone();

        assert!(matches!(
            board.apply_move(&m),
            Err(BoardError::IllegalMoveRequest(_))
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn move_blocked_since_generation_is_rejected() {
        let mut board = Board::from_fen("8/8/8/8/8/8/8/R6r w - - 0 1").unwrap();
        let long = board.find_move(sq("a1"), sq("a8")).unwrap();

        board.apply_fen("8/8/8/8/r7/8/8/R7 w - - 0 1").unwrap();
        let before = board.clone();
        assert!(matches!(
            board.apply_move(&long),
            Err(BoardError::IllegalMoveRequest(_))
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn apply_uci_resolves_moves() {
        let mut board = Board::new();
        let m = board.apply_uci("e2e4").unwrap();
        assert_eq!(m.to(), sq("e4"));
        assert!(matches!(
            board.apply_uci("e2e4"),
            Err(BoardError::IllegalMoveRequest(_))
        ));
        assert!(matches!(
            board.apply_uci("zz99"),
            Err(BoardError::IllegalMoveRequest(_))
        ));
    }

    #[test]
    fn display_diagram() {
        let board = Board::new();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
