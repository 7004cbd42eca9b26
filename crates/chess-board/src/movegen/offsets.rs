//! Offset tables in tile-index space.
//!
//! Every entry is a signed step applied to a tile index. Side-to-side wrap
//! is filtered separately by [`chess_core::geometry::wraps_around`].

/// Knight jumps.
pub const KNIGHT: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// The eight neighbouring tiles.
pub const KING: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Diagonal rays.
pub const BISHOP: [i8; 4] = [-9, -7, 7, 9];

/// Orthogonal rays.
pub const ROOK: [i8; 4] = [-8, -1, 1, 8];

/// All eight rays.
pub const QUEEN: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
