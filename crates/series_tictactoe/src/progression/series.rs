//! Best-of-seven series between two competitors.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{FinalStandings, Progress, Progression};
use crate::schedule::CompetitorIndex;
use crate::types::{GameResult, Mark};

/// Wins needed to take a series.
pub const SERIES_WINS_NEEDED: u32 = 4;

/// Running score of a best-of-seven series.
///
/// Competitor 0 holds X in every game, competitor 1 holds O. Draws are
/// replayed under the same game number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesScore {
    wins_a: u32,
    wins_b: u32,
    current_game_number: u32,
}

impl SeriesScore {
    /// Creates a series at 0-0, game 1.
    pub fn new() -> Self {
        Self {
            wins_a: 0,
            wins_b: 0,
            current_game_number: 1,
        }
    }

    /// Series wins of competitor 0.
    pub fn wins_a(&self) -> u32 {
        self.wins_a
    }

    /// Series wins of competitor 1.
    pub fn wins_b(&self) -> u32 {
        self.wins_b
    }

    /// Number of the game being played. Every decisive result moves it on,
    /// the clinching one included, so a finished series reads one past
    /// [`games_played`](Self::games_played).
    pub fn current_game_number(&self) -> u32 {
        self.current_game_number
    }

    /// Decisive games played so far.
    pub fn games_played(&self) -> u32 {
        self.wins_a + self.wins_b
    }

    fn winner(&self) -> Option<CompetitorIndex> {
        if self.wins_a >= SERIES_WINS_NEEDED {
            Some(0)
        } else if self.wins_b >= SERIES_WINS_NEEDED {
            Some(1)
        } else {
            None
        }
    }
}

impl Default for SeriesScore {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression for SeriesScore {
    #[instrument(skip(self), fields(wins_a = self.wins_a, wins_b = self.wins_b))]
    fn record(&mut self, result: GameResult) -> Progress {
        if let Some(winner) = self.winner() {
            debug!("Series already decided, ignoring result");
            return Progress::Complete { winner };
        }

        match result.winner() {
            Some(Mark::X) => self.wins_a += 1,
            Some(Mark::O) => self.wins_b += 1,
            None => {
                debug!(game = self.current_game_number, "Drawn game, replaying");
                return Progress::Continue;
            }
        }
        self.current_game_number += 1;

        if let Some(winner) = self.winner() {
            info!(
                winner,
                wins_a = self.wins_a,
                wins_b = self.wins_b,
                "Series complete"
            );
            return Progress::Complete { winner };
        }
        Progress::Continue
    }

    fn is_complete(&self) -> bool {
        self.winner().is_some()
    }

    fn current_pairing(&self) -> Option<(CompetitorIndex, CompetitorIndex)> {
        if self.is_complete() { None } else { Some((0, 1)) }
    }

    fn final_standings(&self) -> Option<FinalStandings> {
        self.winner().map(|winner| FinalStandings {
            winner,
            wins: vec![self.wins_a, self.wins_b],
        })
    }
}
