//! Three-in-a-row detection.

use crate::{Board, Mark, Position, Square};
use Position::*;

/// Winning lines in scan order: rows top to bottom, columns left to right,
/// then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [TopLeft, TopCenter, TopRight],
    [MiddleLeft, Center, MiddleRight],
    [BottomLeft, BottomCenter, BottomRight],
    [TopLeft, MiddleLeft, BottomLeft],
    [TopCenter, Center, BottomCenter],
    [TopRight, MiddleRight, BottomRight],
    [TopLeft, Center, BottomRight],
    [TopRight, Center, BottomLeft],
];

/// Mark on the first line in [`LINES`] whose three squares agree.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&line| {
        let [first, rest @ ..] = line.map(|cell| board.get(cell));
        match first {
            Square::Occupied(mark) if rest.iter().all(|&sq| sq == first) => Some(mark),
            _ => None,
        }
    })
}
