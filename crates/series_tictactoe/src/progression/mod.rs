//! Multi-game progression.
//!
//! Each multi-game mode owns one [`Progression`] implementation. The session
//! controller feeds it every finished game and reads back who plays next and
//! whether the whole session is decided.

mod series;
mod tournament;

pub use series::{SERIES_WINS_NEEDED, SeriesScore};
pub use tournament::TournamentState;

use serde::{Deserialize, Serialize};

use crate::schedule::CompetitorIndex;
use crate::types::GameResult;

/// What a recorded game did to the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    /// Nothing beyond the game tally changed (draws land here too).
    Continue,
    /// A tournament match was decided and play moves to the next match.
    MatchDecided {
        /// Winner of the decided match.
        winner: CompetitorIndex,
    },
    /// The round finished level at the top; a tiebreaker round begins.
    TiebreakerStarted(Vec<CompetitorIndex>),
    /// The session has an overall winner.
    Complete {
        /// Overall winner.
        winner: CompetitorIndex,
    },
}

/// Result of a finished series or tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStandings {
    /// Overall winner.
    pub winner: CompetitorIndex,
    /// Total game wins per competitor, indexed like the name list.
    pub wins: Vec<u32>,
}

/// Standings engine for one multi-game mode.
pub trait Progression {
    /// Applies one finished game.
    ///
    /// `result` is interpreted against [`Progression::current_pairing`]:
    /// X belongs to the first competitor, O to the second.
    fn record(&mut self, result: GameResult) -> Progress;

    /// True once an overall winner is known.
    fn is_complete(&self) -> bool;

    /// Competitors holding X and O in the next game, `None` when complete.
    fn current_pairing(&self) -> Option<(CompetitorIndex, CompetitorIndex)>;

    /// Standings once complete.
    fn final_standings(&self) -> Option<FinalStandings>;
}
