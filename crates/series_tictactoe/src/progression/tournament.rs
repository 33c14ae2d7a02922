//! Round-robin tournament with best-of-3 matches and tiebreakers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{FinalStandings, Progress, Progression};
use crate::schedule::{CompetitorIndex, Match, generate_round_robin, generate_tiebreaker};
use crate::types::GameResult;

/// State of a round-robin tournament.
///
/// Game wins are tallied per competitor across the whole tournament,
/// tiebreakers included. When the schedule runs out with more than one
/// competitor on the top tally, the schedule is replaced by a tiebreaker
/// among exactly those competitors; this repeats until the lead is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentState {
    matches: Vec<Match>,
    current_match_index: usize,
    wins_per_competitor: Vec<u32>,
    is_tiebreaker: bool,
    tiebreaker_competitors: Vec<CompetitorIndex>,
}

impl TournamentState {
    /// Starts a tournament for `competitors` players with a shuffled round
    /// robin.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(competitors: usize, rng: &mut R) -> Self {
        Self {
            matches: generate_round_robin(competitors, rng),
            current_match_index: 0,
            wins_per_competitor: vec![0; competitors],
            is_tiebreaker: false,
            tiebreaker_competitors: Vec::new(),
        }
    }

    /// Current schedule (the tiebreaker schedule once one started).
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Index of the match being played.
    pub fn current_match_index(&self) -> usize {
        self.current_match_index
    }

    /// Match being played, `None` when the schedule is exhausted.
    pub fn current_match(&self) -> Option<&Match> {
        self.matches.get(self.current_match_index)
    }

    /// Tournament-wide game wins per competitor.
    pub fn wins_per_competitor(&self) -> &[u32] {
        &self.wins_per_competitor
    }

    /// True while a tiebreaker schedule is active.
    pub fn is_tiebreaker(&self) -> bool {
        self.is_tiebreaker
    }

    /// Competitors in the latest tiebreaker.
    pub fn tiebreaker_competitors(&self) -> &[CompetitorIndex] {
        &self.tiebreaker_competitors
    }

    /// Competitors sharing the top tally, in index order.
    pub fn leaders(&self) -> Vec<CompetitorIndex> {
        let Some(&max) = self.wins_per_competitor.iter().max() else {
            return Vec::new();
        };
        self.wins_per_competitor
            .iter()
            .enumerate()
            .filter(|&(_, &wins)| wins == max)
            .map(|(i, _)| i)
            .collect()
    }

    fn sole_leader(&self) -> Option<CompetitorIndex> {
        match self.leaders().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Called when the pointer runs off the schedule.
    fn close_round(&mut self) -> Progress {
        let leaders = self.leaders();
        if let [winner] = leaders.as_slice() {
            info!(
                winner,
                wins = ?self.wins_per_competitor,
                "Tournament complete"
            );
            return Progress::Complete { winner: *winner };
        }

        info!(tied = ?leaders, "Round finished level, starting tiebreaker");
        self.matches = generate_tiebreaker(&leaders);
        self.current_match_index = 0;
        self.is_tiebreaker = true;
        self.tiebreaker_competitors = leaders.clone();
        Progress::TiebreakerStarted(leaders)
    }
}

impl Progression for TournamentState {
    #[instrument(skip(self), fields(match_index = self.current_match_index))]
    fn record(&mut self, result: GameResult) -> Progress {
        if self.is_complete() {
            debug!("Tournament already decided, ignoring result");
            return match self.sole_leader() {
                Some(winner) => Progress::Complete { winner },
                None => Progress::Continue,
            };
        }

        let Some(mark) = result.winner() else {
            debug!("Drawn game, match continues");
            return Progress::Continue;
        };

        let Some(current) = self.matches.get_mut(self.current_match_index) else {
            debug!("No match scheduled, ignoring result");
            return Progress::Continue;
        };
        let Some(credited) = current.record_win(mark) else {
            return Progress::Continue;
        };
        self.wins_per_competitor[credited] += 1;

        if !current.is_completed() {
            debug!(
                wins_a = current.wins_a(),
                wins_b = current.wins_b(),
                "Game recorded"
            );
            return Progress::Continue;
        }

        info!(
            winner = credited,
            wins_a = current.wins_a(),
            wins_b = current.wins_b(),
            "Match decided"
        );
        self.current_match_index += 1;
        if self.current_match_index < self.matches.len() {
            return Progress::MatchDecided { winner: credited };
        }

        self.close_round()
    }

    fn is_complete(&self) -> bool {
        self.current_match_index >= self.matches.len() && self.sole_leader().is_some()
    }

    fn current_pairing(&self) -> Option<(CompetitorIndex, CompetitorIndex)> {
        if self.is_complete() {
            return None;
        }
        self.current_match()
            .map(|m| (m.competitor_a(), m.competitor_b()))
    }

    fn final_standings(&self) -> Option<FinalStandings> {
        if !self.is_complete() {
            return None;
        }
        self.sole_leader().map(|winner| FinalStandings {
            winner,
            wins: self.wins_per_competitor.clone(),
        })
    }
}
