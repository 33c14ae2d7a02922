//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the session controller and the players can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::types::{Board, GameResult};
use tracing::instrument;

/// Evaluates a board: a completed line wins, a full board draws, anything
/// else is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(mark) = check_winner(board) {
        GameResult::Won(mark)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
