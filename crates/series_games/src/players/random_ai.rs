//! AI that plays a uniformly random empty cell.

use super::{Player, Turn};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use series_tictactoe::{Board, Mark, Position};
use std::time::Duration;
use tracing::{debug, instrument};

/// Random-move AI.
pub struct RandomAi {
    name: String,
    rng: StdRng,
    think_time: Duration,
}

impl RandomAi {
    /// Creates an AI with a fixed seed and no thinking pause.
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
            think_time: Duration::ZERO,
        }
    }

    /// Pauses this long before every move.
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }
}

#[async_trait::async_trait]
impl Player for RandomAi {
    #[instrument(skip(self, board), fields(ai = %self.name))]
    async fn get_move(&mut self, board: &Board, mark: Mark) -> Result<Turn> {
        if !self.think_time.is_zero() {
            tokio::time::sleep(self.think_time).await;
        }

        let choice = Position::valid_moves(board).choose(&mut self.rng).copied();
        match choice {
            Some(pos) => {
                debug!(position = %pos, "AI chose position");
                Ok(Turn::Place(pos))
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[tokio::test]
    async fn test_only_picks_empty_cells() {
        let mut board = Board::new();
        for pos in Position::iter().take(8) {
            board.place(pos, Mark::X);
        }
        let mut ai = RandomAi::new("bot", 1);
        assert_eq!(
            ai.get_move(&board, Mark::O).await.unwrap(),
            Turn::Place(Position::BottomRight)
        );
    }

    #[tokio::test]
    async fn test_full_board_is_an_error() {
        let mut board = Board::new();
        for pos in Position::iter() {
            board.place(pos, Mark::X);
        }
        let mut ai = RandomAi::new("bot", 1);
        assert!(ai.get_move(&board, Mark::O).await.is_err());
    }
}
