//! Match generation for round-robin tournaments.
//!
//! A [`Match`] is a best-of-3 pairing. The round robin schedules every pair
//! twice (home and away) and shuffles the play order; tiebreakers schedule
//! each pair among the tied competitors once, in generation order.

use derive_new::new;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::Mark;

/// Index of a competitor in the session's name list.
pub type CompetitorIndex = usize;

/// Game wins needed to take a tournament match.
pub const MATCH_WINS_NEEDED: u32 = 2;

/// A best-of-3 pairing between two competitors.
///
/// `competitor_a` plays X, `competitor_b` plays O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Match {
    competitor_a: CompetitorIndex,
    competitor_b: CompetitorIndex,
    #[new(default)]
    wins_a: u32,
    #[new(default)]
    wins_b: u32,
    #[new(default)]
    completed: bool,
}

impl Match {
    /// Competitor holding X.
    pub fn competitor_a(&self) -> CompetitorIndex {
        self.competitor_a
    }

    /// Competitor holding O.
    pub fn competitor_b(&self) -> CompetitorIndex {
        self.competitor_b
    }

    /// Games won by competitor A.
    pub fn wins_a(&self) -> u32 {
        self.wins_a
    }

    /// Games won by competitor B.
    pub fn wins_b(&self) -> u32 {
        self.wins_b
    }

    /// True once either side reached [`MATCH_WINS_NEEDED`].
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Competitor playing `mark` in this match.
    pub fn competitor_for(&self, mark: Mark) -> CompetitorIndex {
        match mark {
            Mark::X => self.competitor_a,
            Mark::O => self.competitor_b,
        }
    }

    /// Winner of a completed match.
    pub fn winner(&self) -> Option<CompetitorIndex> {
        if !self.completed {
            None
        } else if self.wins_a >= MATCH_WINS_NEEDED {
            Some(self.competitor_a)
        } else {
            Some(self.competitor_b)
        }
    }

    /// Credits one game to the competitor playing `mark`.
    ///
    /// Returns the credited competitor, or `None` when the match was already
    /// completed (a completed match never changes).
    #[instrument(skip(self), fields(a = self.competitor_a, b = self.competitor_b))]
    pub fn record_win(&mut self, mark: Mark) -> Option<CompetitorIndex> {
        if self.completed {
            return None;
        }
        match mark {
            Mark::X => self.wins_a += 1,
            Mark::O => self.wins_b += 1,
        }
        if self.wins_a >= MATCH_WINS_NEEDED || self.wins_b >= MATCH_WINS_NEEDED {
            self.completed = true;
        }
        Some(self.competitor_for(mark))
    }
}

/// Generates the home-and-away round robin for `n` competitors.
///
/// Every ordered pair `(i, j)`, `i != j`, appears exactly once, giving
/// `n * (n - 1)` matches. The play order is shuffled with `rng`.
#[instrument(skip(rng))]
pub fn generate_round_robin<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Match> {
    let mut matches = Vec::with_capacity(n * n.saturating_sub(1));
    for i in 0..n {
        for j in (i + 1)..n {
            matches.push(Match::new(i, j));
            matches.push(Match::new(j, i));
        }
    }
    matches.shuffle(rng);
    debug!(count = matches.len(), "Generated round robin");
    matches
}

/// Generates one match per unordered pair of `tied` competitors.
///
/// Pairs keep the order of `tied`: for `[a, b, c]` the result is
/// `(a, b), (a, c), (b, c)`.
#[instrument]
pub fn generate_tiebreaker(tied: &[CompetitorIndex]) -> Vec<Match> {
    let mut matches = Vec::new();
    for (i, &a) in tied.iter().enumerate() {
        for &b in &tied[i + 1..] {
            matches.push(Match::new(a, b));
        }
    }
    debug!(count = matches.len(), "Generated tiebreaker");
    matches
}
