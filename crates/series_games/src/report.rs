//! Printable summary of a finished session.

use serde::Serialize;
use series_tictactoe::{FinalStandings, GameMode, GameSession};

/// One row of the final table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitorReport {
    /// Competitor name.
    pub name: String,
    /// Team id, if teams were picked.
    pub team: Option<String>,
    /// Game wins.
    pub wins: u32,
}

/// Final result of a series or tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Session mode.
    pub mode: GameMode,
    /// Overall winner.
    pub winner: String,
    /// Rows in competitor order.
    pub competitors: Vec<CompetitorReport>,
    /// Decisive games played.
    pub games: u32,
}

impl SessionReport {
    /// Builds the report from a session and its final standings.
    pub fn new(session: &GameSession, standings: &FinalStandings) -> Self {
        let state = session.state();
        let competitors: Vec<_> = state
            .competitor_names()
            .iter()
            .enumerate()
            .map(|(i, name)| CompetitorReport {
                name: name.clone(),
                team: state.competitor_teams().get(i).cloned(),
                wins: standings.wins.get(i).copied().unwrap_or(0),
            })
            .collect();
        Self {
            mode: session.mode(),
            winner: session.name_of(standings.winner).unwrap_or("?").to_string(),
            games: competitors.iter().map(|c| c.wins).sum(),
            competitors,
        }
    }

    /// Plain-text table.
    pub fn render(&self) -> String {
        let mut out = format!("{} wins the {}!\n", self.winner, self.mode);
        for c in &self.competitors {
            let team = c.team.as_deref().map(|t| format!(" ({t})")).unwrap_or_default();
            out.push_str(&format!("  {}{}: {}\n", c.name, team, c.wins));
        }
        out
    }
}
