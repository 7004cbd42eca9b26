//! Board square representation.

use crate::geometry::{self, NUM_TILES};
use std::fmt;

/// A file (column letter) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// Files by index column: column 0 is the h-file.
    const BY_COLUMN: [File; 8] = [
        File::H,
        File::G,
        File::F,
        File::E,
        File::D,
        File::C,
        File::B,
        File::A,
    ];

    /// Creates a file from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            _ => None,
        }
    }

    /// Column of this file in tile-index space.
    #[inline]
    pub const fn column(self) -> u8 {
        7 - self as u8
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    const BY_ROW: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Row of this rank in tile-index space (rank 1 is row 0).
    #[inline]
    pub const fn row(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A tile index on the chess board, always in `0..64`.
///
/// Indices follow FEN scan order in reverse: a8 = 63, b8 = 62, ..., h8 = 56,
/// a7 = 55, ..., h1 = 0. The column (`index % 8`) therefore counts from the
/// h-file, while the row (`index / 8`) matches the rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.row() * 8 + file.column())
    }

    /// Creates a square from a tile index (0-63).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_TILES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares in ascending index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_TILES as u8).map(Square)
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Returns the tile index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the column in index space (0 = h-file, 7 = a-file).
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// Returns the row in index space (0 = rank 1, 7 = rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::BY_COLUMN[self.column() as usize]
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::BY_ROW[self.row() as usize]
    }

    /// Steps `offset` tiles away, returning `None` if the result is off the
    /// board or wrapped around a side edge.
    #[inline]
    pub const fn offset(self, offset: i8) -> Option<Square> {
        let target = self.0 as i32 + offset as i32;
        if !geometry::is_valid_coordinate(target) || geometry::wraps_around(self.index(), offset) {
            return None;
        }
        Some(Square(target as u8))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    pub const H1: Square = Square(0);
    pub const A1: Square = Square(7);
    pub const A8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
