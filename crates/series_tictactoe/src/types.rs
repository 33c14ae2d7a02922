//! Core domain types for a single tic-tac-toe game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;

/// Mark placed on the board.
///
/// X always opens a game; the session decides which competitor holds which
/// mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// First mover.
    X,
    /// Second mover.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Mark),
}

/// 3x3 board, squares in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the square at `pos`.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Writes `mark` into `pos` if the square is still empty.
    ///
    /// Returns `false` and leaves the board untouched when the square is
    /// already occupied. Squares never revert to empty within a game.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> bool {
        let square = &mut self.squares[pos.to_index()];
        if *square != Square::Empty {
            return false;
        }
        *square = Square::Occupied(mark);
        true
    }

    /// `true` if nothing is on `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Text grid with `-+-+-` separators. Empty squares show their 1-based
    /// cell number so a player can type it.
    pub fn display(&self) -> String {
        self.squares
            .chunks(3)
            .enumerate()
            .map(|(row, squares)| {
                squares
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => (row * 3 + col + 1).to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

/// Outcome of a single game as seen by the win evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has a line.
    #[default]
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board is full with no line.
    Draw,
}

impl GameResult {
    /// True once the game can accept no more moves.
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }

    /// Winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameResult::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_refuses_occupied_square() {
        let mut board = Board::new();
        assert!(board.place(Position::Center, Mark::X));
        assert!(!board.place(Position::Center, Mark::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_display_shows_cell_numbers() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.place(Position::BottomRight, Mark::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
