//! FEN (Forsyth-Edwards Notation) parsing and serialization.
//!
//! The board field is scanned left to right starting at tile 63 (a8) and
//! filling towards tile 0 (h1). The remaining five fields are validated and
//! carried along verbatim; nothing in this crate interprets them.

use crate::geometry::NUM_TILES;
use crate::{Alliance, Piece, Square};
use thiserror::Error;

/// The contents of all 64 tiles, indexed by tile index.
pub type Placement = [Option<Piece>; NUM_TILES];

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Parsed FEN data.
///
/// Holds the six FEN fields after validation. The board field is kept as
/// text; [`decode_placement`] turns it into tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    /// Piece placement string (e.g., "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub piece_placement: String,
    /// Side to move
    pub active_color: Alliance,
    /// Castling availability (e.g., "KQkq", "-")
    pub castling: String,
    /// En passant target square (e.g., "e3", "-")
    pub en_passant: String,
    /// Halfmove clock, exactly as written in the input
    pub halfmove_clock: String,
    /// Fullmove number, exactly as written in the input
    pub fullmove_number: String,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// An empty board with White to move.
    pub const EMPTY: &'static str = "8/8/8/8/8/8/8/8 w - - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let piece_placement = parts[0];
        decode_placement(piece_placement)?;

        let active_color = parts[1]
            .chars()
            .next()
            .filter(|_| parts[1].len() == 1)
            .and_then(Alliance::from_fen_char)
            .ok_or_else(|| FenError::InvalidActiveColor(parts[1].to_string()))?;

        let castling = parts[2];
        Self::validate_castling(castling)?;

        let en_passant = parts[3];
        Self::validate_en_passant(en_passant)?;

        let halfmove_clock = parts[4];
        halfmove_clock
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(halfmove_clock.to_string()))?;

        let fullmove_number = parts[5];
        fullmove_number
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(fullmove_number.to_string()))?;

        Ok(FenParser {
            piece_placement: piece_placement.to_string(),
            active_color,
            castling: castling.to_string(),
            en_passant: en_passant.to_string(),
            halfmove_clock: halfmove_clock.to_string(),
            fullmove_number: fullmove_number.to_string(),
        })
    }


    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }

        let mut seen = String::new();
        for c in castling.chars() {
            if !"KQkq".contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )));
            }
            if seen.contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "duplicate right '{}'",
                    c
                )));
            }
            seen.push(c);
        }

        Ok(())
    }

    fn validate_en_passant(ep: &str) -> Result<(), FenError> {
        if ep == "-" {
            return Ok(());
        }

        if ep.len() != 2 {
            return Err(FenError::InvalidEnPassantSquare(ep.to_string()));
        }

        let chars: Vec<char> = ep.chars().collect();
        if !('a'..='h').contains(&chars[0]) || !(chars[1] == '3' || chars[1] == '6') {
            return Err(FenError::InvalidEnPassantSquare(ep.to_string()));
        }

        Ok(())
    }

    /// Converts the parsed FEN back to a FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.piece_placement,
            self.active_color.to_fen_char(),
            self.castling,
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl Default for FenParser {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}

/// Decodes a FEN board field into 64 tiles.
///
/// Each rank must describe exactly eight squares using the digits 1-8 and
/// the letters `pnbrqkPNBRQK`, and there must be exactly eight ranks.
/// Anything else is rejected before a tile outside the board could be
/// addressed.
pub fn decode_placement(placement: &str) -> Result<Placement, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut tiles: Placement = [None; NUM_TILES];
    let mut cursor = NUM_TILES;

    for (i, rank) in ranks.iter().enumerate() {
        let rank_number = 8 - i;
        let mut squares = 0usize;

        for c in rank.chars() {
            let width = match c {
                '1'..='8' => (c as u8 - b'0') as usize,
                _ => 1,
            };
            if squares + width > 8 {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has more than 8 squares",
                    rank_number
                )));
            }

            if width == 1 && !c.is_ascii_digit() {
                let square = cursor.checked_sub(1).and_then(Square::from_index).ok_or_else(|| {
                    FenError::InvalidPiecePlacement(format!("rank {} overflows", rank_number))
                })?;
                let piece = Piece::from_fen_char(square, c).ok_or_else(|| {
                    FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c, rank_number
                    ))
                })?;
                tiles[square.index()] = Some(piece);
            } else if !('1'..='8').contains(&c) {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid digit '{}' in rank {}",
                    c, rank_number
                )));
            }

            squares += width;
            cursor -= width;
        }

        if squares != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                rank_number, squares
            )));
        }
    }

    Ok(tiles)
}

/// Encodes 64 tiles as a FEN board field.
///
/// Runs of empty tiles are always merged into a single digit, so the output
/// is the canonical form of any board field that decodes to `tiles`.
pub fn encode_placement(tiles: &Placement) -> String {
    let mut fen = String::with_capacity(72);

    for row in (0..8).rev() {
        let mut empty_count = 0;
        for column in (0..8).rev() {
            match &tiles[row * 8 + column] {
                Some(piece) => {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if row > 0 {
            fen.push('/');
        }
    }

    fen
}
