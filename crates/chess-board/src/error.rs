//! Board error type.

use chess_core::FenError;
use thiserror::Error;

/// Errors raised by [`Board`](crate::Board) operations.
///
/// Move generation never fails; only decoding, index lookups and applying a
/// move that no longer matches the board can.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The encoding could not be decoded into 64 tiles.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(#[from] FenError),

    /// A tile index outside `0..64` was requested.
    #[error("tile index {0} is out of range (expected 0..64)")]
    OutOfRangeIndex(usize),

    /// The move does not match the current board contents.
    #[error("illegal move request: {0}")]
    IllegalMoveRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = BoardError::OutOfRangeIndex(64);
        assert!(err.to_string().contains("64"));

        let err = BoardError::IllegalMoveRequest("e2e4".to_string());
        assert_eq!(err.to_string(), "illegal move request: e2e4");

        let err: BoardError = FenError::InvalidPartCount(2).into();
        assert!(matches!(err, BoardError::MalformedEncoding(_)));
        assert!(err.to_string().starts_with("malformed encoding"));
    }
}
