//! Named board cells.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::types::Board;

/// A board cell. Discriminants are the row-major indices 0-8.
///
/// Displays and parses as kebab-case (`"middle-right"`), ignoring case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[allow(missing_docs)]
    TopLeft,
    #[allow(missing_docs)]
    TopCenter,
    #[allow(missing_docs)]
    TopRight,
    #[allow(missing_docs)]
    MiddleLeft,
    #[allow(missing_docs)]
    Center,
    #[allow(missing_docs)]
    MiddleRight,
    #[allow(missing_docs)]
    BottomLeft,
    #[allow(missing_docs)]
    BottomCenter,
    #[allow(missing_docs)]
    BottomRight,
}

impl Position {
    /// Resolves typed input: a 0-based index or a cell name.
    pub fn lookup(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(index) => Self::from_index(index),
            Err(_) => input.parse().ok(),
        }
    }

    /// Row-major board index.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Empty cells of `board`, lowest index first.
    pub fn valid_moves(board: &Board) -> Vec<Self> {
        Self::iter().filter(|&cell| board.is_empty(cell)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn indices_follow_declaration_order() {
        let indices: Vec<usize> = Position::iter().map(Position::to_index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
        assert_eq!(Position::from_index(4), Some(Position::Center));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn lookup_accepts_numbers_and_names() {
        assert_eq!(Position::lookup("8"), Some(Position::BottomRight));
        assert_eq!(Position::lookup(" Middle-Left "), Some(Position::MiddleLeft));
        assert_eq!(Position::lookup("12"), None);
        assert_eq!(Position::lookup("middle"), None);
        assert_eq!(Position::TopCenter.to_string(), "top-center");
    }

    #[test]
    fn occupied_cells_are_not_moves() {
        let mut board = Board::new();
        board.place(Position::TopRight, Mark::O);
        board.place(Position::BottomLeft, Mark::X);

        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Position::TopLeft);
        assert!(!moves.contains(&Position::TopRight));
        assert!(!moves.contains(&Position::BottomLeft));
    }
}
