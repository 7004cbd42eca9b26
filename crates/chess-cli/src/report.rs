//! Machine-readable move listings.

use chess_board::{Move, MoveList};
use serde::Serialize;

/// One generated move, as printed by `tilechess moves --json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MoveReport {
    pub uci: String,
    pub from: String,
    pub to: String,
    pub piece: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured: Option<char>,
}

impl From<&Move> for MoveReport {
    fn from(m: &Move) -> Self {
        MoveReport {
            uci: m.to_uci(),
            from: m.from().to_algebraic(),
            to: m.to().to_algebraic(),
            piece: m.piece().to_fen_char(),
            captured: m.captured().map(|p| p.to_fen_char()),
        }
    }
}

/// Renders a move list as pretty-printed JSON.
pub fn to_json(moves: &MoveList) -> serde_json::Result<String> {
    let reports: Vec<MoveReport> = moves.iter().map(MoveReport::from).collect();
    serde_json::to_string_pretty(&reports)
}

/// Renders a move list as one coordinate move per line.
pub fn to_lines(moves: &MoveList) -> String {
    moves
        .iter()
        .map(|m| {
            if m.is_capture() {
                format!("{} (captures {})", m, m.captured().map_or('?', |p| p.to_fen_char()))
            } else {
                m.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
