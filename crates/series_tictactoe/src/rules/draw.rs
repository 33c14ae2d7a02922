//! Full-board detection.

use crate::{Board, Square};

/// `true` once no square is empty. Callers check for a line first.
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};
    use strum::IntoEnumIterator;

    #[test]
    fn fills_up_one_square_at_a_time() {
        let mut board = Board::new();
        assert!(!is_full(&board));
        for (i, cell) in Position::iter().enumerate() {
            assert!(!is_full(&board), "full after {} marks", i);
            board.place(cell, if i % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert!(is_full(&board));
    }
}
