//! Tile index geometry.
//!
//! Tiles are addressed by a linear index in `0..64`. Index 63 is the first
//! square listed in a FEN board field (a8) and index 0 the last (h1), so the
//! index grows from the h-file towards the a-file along a row and from rank
//! 1 towards rank 8 across rows. A *column* is `index % 8`; a *row* is
//! `index / 8`.
//!
//! Leaper and slider offsets are plain index arithmetic, which wraps across
//! the board edge on the outer columns. The column tables below let move
//! generation reject those wrapped targets.

/// Number of tiles on the board.
pub const NUM_TILES: usize = 64;

/// Tiles per row and per column.
pub const BOARD_DIM: usize = 8;

/// Tiles in column 0.
pub const FIRST_COLUMN: [bool; NUM_TILES] = init_column(0);
/// Tiles in column 1.
pub const SECOND_COLUMN: [bool; NUM_TILES] = init_column(1);
/// Tiles in column 6.
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = init_column(6);
/// Tiles in column 7.
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = init_column(7);

const fn init_column(mut col: usize) -> [bool; NUM_TILES] {
    let mut column = [false; NUM_TILES];
    while col < NUM_TILES {
        column[col] = true;
        col += BOARD_DIM;
    }
    column
}

/// Returns true if `idx` addresses a tile.
///
/// This is a pure range check. It does not detect an offset that wrapped
/// around a board edge; see [`wraps_around`] for that.
#[inline]
pub const fn is_valid_coordinate(idx: i32) -> bool {
    idx >= 0 && idx < NUM_TILES as i32
}

#[inline]
const fn first_column_exclusion(idx: usize, offset: i8) -> bool {
    FIRST_COLUMN[idx] && matches!(offset, -17 | -10 | 6 | 15 | -1 | -9 | 7)
}

#[inline]
const fn second_column_exclusion(idx: usize, offset: i8) -> bool {
    SECOND_COLUMN[idx] && matches!(offset, -10 | 6)
}

#[inline]
const fn seventh_column_exclusion(idx: usize, offset: i8) -> bool {
    SEVENTH_COLUMN[idx] && matches!(offset, 10 | -6)
}

#[inline]
const fn eighth_column_exclusion(idx: usize, offset: i8) -> bool {
    EIGHTH_COLUMN[idx] && matches!(offset, 17 | 10 | -6 | -15 | 1 | 9 | -7)
}

/// Returns true if stepping `offset` from tile `idx` would leave the board
/// sideways and re-enter on the opposite edge.
///
/// Covers knight offsets (±6, ±10, ±15, ±17) and single king/slider steps
/// (±1, ±7, ±9). Vertical steps (±8) never wrap.
#[inline]
pub const fn wraps_around(idx: usize, offset: i8) -> bool {
    if idx >= NUM_TILES {
        return false;
    }
    first_column_exclusion(idx, offset)
        || second_column_exclusion(idx, offset)
        || seventh_column_exclusion(idx, offset)
        || eighth_column_exclusion(idx, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        assert!(is_valid_coordinate(0));
        assert!(is_valid_coordinate(63));
        assert!(!is_valid_coordinate(-1));
        assert!(!is_valid_coordinate(64));
    }

    #[test]
    fn column_tables() {
        let first: Vec<usize> = (0..NUM_TILES).filter(|&i| FIRST_COLUMN[i]).collect();
        assert_eq!(first, vec![0, 8, 16, 24, 32, 40, 48, 56]);

        let eighth: Vec<usize> = (0..NUM_TILES).filter(|&i| EIGHTH_COLUMN[i]).collect();
        assert_eq!(eighth, vec![7, 15, 23, 31, 39, 47, 55, 63]);

        for i in 0..NUM_TILES {
            assert_eq!(SECOND_COLUMN[i], i % 8 == 1);
            assert_eq!(SEVENTH_COLUMN[i], i % 8 == 6);
        }
    }

    #[test]
    fn knight_wraps() {
        // Column 0 loses every offset that moves towards column 7.
        for offset in [-17, -10, 6, 15] {
            assert!(wraps_around(24, offset), "offset {offset}");
        }
        for offset in [17, 10, -6, -15] {
            assert!(!wraps_around(24, offset), "offset {offset}");
        }
        // Column 1 only loses the two-column sideways jumps.
        assert!(wraps_around(25, -10));
        assert!(wraps_around(25, 6));
        assert!(!wraps_around(25, -17));
        assert!(!wraps_around(25, 15));
    }

    #[test]
    fn unit_steps_wrap_only_on_edge_columns() {
        assert!(wraps_around(8, -1));
        assert!(wraps_around(15, 1));
        assert!(wraps_around(15, 9));
        assert!(wraps_around(8, 7));
        assert!(!wraps_around(12, 1));
        assert!(!wraps_around(12, -9));
        assert!(!wraps_around(8, 8));
        assert!(!wraps_around(15, -8));
    }

    #[test]
    fn every_allowed_step_stays_within_two_columns() {
        for idx in 0..NUM_TILES {
            for offset in [-17i8, -15, -10, -9, -8, -7, -6, -1, 1, 6, 7, 8, 9, 10, 15, 17] {
                let target = idx as i32 + offset as i32;
                if !is_valid_coordinate(target) || wraps_around(idx, offset) {
                    continue;
                }
                let drift = (idx as i32 % 8 - target % 8).abs();
                assert!(drift <= 2, "{idx} + {offset} drifted {drift} columns");
            }
        }
    }
}
