//! Human player reading moves from the terminal.

use super::{Player, Turn};
use anyhow::Result;
use series_tictactoe::{Board, Mark, Position};
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, instrument};

/// Line source shared by every human at the same terminal.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Forwards stdin lines into a [`SharedInput`] until EOF.
///
/// Reads on a detached OS thread so a pending read never holds up runtime
/// shutdown.
pub fn spawn_stdin_reader() -> SharedInput {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("Stdin closed");
    });
    Arc::new(Mutex::new(rx))
}

/// Human player typing cell numbers (1-9, as shown on the board) or labels.
pub struct HumanPlayer {
    name: String,
    input: SharedInput,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: SharedInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }

    fn parse(line: &str) -> Turn {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Turn::Quit;
        }
        let position = match trimmed.parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => Position::from_index(n - 1),
            Ok(_) => None,
            Err(_) => Position::lookup(trimmed),
        };
        match position {
            Some(pos) => Turn::Place(pos),
            None => Turn::Invalid(trimmed.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip(self, _board), fields(player = %self.name))]
    async fn get_move(&mut self, _board: &Board, _mark: Mark) -> Result<Turn> {
        let line = self.input.lock().await.recv().await;
        match line {
            Some(line) => Ok(Self::parse(&line)),
            None => {
                debug!("Input closed, quitting");
                Ok(Turn::Quit)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(HumanPlayer::parse("1"), Turn::Place(Position::TopLeft));
        assert_eq!(HumanPlayer::parse(" 9 "), Turn::Place(Position::BottomRight));
        assert_eq!(HumanPlayer::parse("0"), Turn::Invalid("0".to_string()));
    }

    #[test]
    fn test_labels_and_quit() {
        assert_eq!(HumanPlayer::parse("center"), Turn::Place(Position::Center));
        assert_eq!(HumanPlayer::parse("QUIT"), Turn::Quit);
        assert_eq!(HumanPlayer::parse("left"), Turn::Invalid("left".to_string()));
    }

    #[tokio::test]
    async fn test_reads_from_shared_input() {
        let (tx, rx) = mpsc::unbounded_channel();
        let input: SharedInput = Arc::new(Mutex::new(rx));
        let mut ada = HumanPlayer::new("Ada", input.clone());
        let mut grace = HumanPlayer::new("Grace", input);

        tx.send("5".to_string()).unwrap();
        tx.send("top-left".to_string()).unwrap();
        drop(tx);

        let board = Board::new();
        assert_eq!(
            ada.get_move(&board, Mark::X).await.unwrap(),
            Turn::Place(Position::Center)
        );
        assert_eq!(
            grace.get_move(&board, Mark::O).await.unwrap(),
            Turn::Place(Position::TopLeft)
        );
        assert_eq!(ada.get_move(&board, Mark::X).await.unwrap(), Turn::Quit);
    }
}
