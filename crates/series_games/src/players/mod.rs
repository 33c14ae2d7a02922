//! Player trait and implementations.

mod human;
mod random_ai;

pub use human::{HumanPlayer, SharedInput, spawn_stdin_reader};
pub use random_ai::RandomAi;

use anyhow::Result;
use series_tictactoe::{Board, Mark, Position};

/// What a player wants to do on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Place the mark here.
    Place(Position),
    /// Input that names no cell.
    Invalid(String),
    /// Leave the session.
    Quit,
}

/// Something that can choose moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses a move for `mark` on `board`.
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
