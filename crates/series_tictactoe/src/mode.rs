//! Session modes and their mode-specific payloads.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::progression::{Progression, SeriesScore, TournamentState};
use crate::teams::League;

/// How games in a session relate to each other.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Independent games, no standings.
    Normal,
    /// Home-and-away round robin of best-of-3 matches.
    RoundRobin,
    /// First to four wins between two competitors.
    BestOfSeven,
}

impl GameMode {
    /// League competitors pick teams from, if the mode uses teams.
    pub fn league(self) -> Option<League> {
        match self {
            GameMode::Normal => None,
            GameMode::RoundRobin => Some(League::Formula1),
            GameMode::BestOfSeven => Some(League::Nba),
        }
    }
}

/// Mode together with its standings payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeState {
    /// Independent games.
    Normal,
    /// Round-robin tournament standings.
    RoundRobin(TournamentState),
    /// Best-of-seven series score.
    BestOfSeven(SeriesScore),
}

impl ModeState {
    /// Fresh standings for `mode` with `competitors` players.
    #[instrument(skip(rng))]
    pub fn fresh<R: Rng + ?Sized>(mode: GameMode, competitors: usize, rng: &mut R) -> Self {
        match mode {
            GameMode::Normal => ModeState::Normal,
            GameMode::RoundRobin => ModeState::RoundRobin(TournamentState::new(competitors, rng)),
            GameMode::BestOfSeven => ModeState::BestOfSeven(SeriesScore::new()),
        }
    }

    /// Mode tag.
    pub fn mode(&self) -> GameMode {
        match self {
            ModeState::Normal => GameMode::Normal,
            ModeState::RoundRobin(_) => GameMode::RoundRobin,
            ModeState::BestOfSeven(_) => GameMode::BestOfSeven,
        }
    }

    /// Standings engine, `None` for normal play.
    pub fn progression(&self) -> Option<&dyn Progression> {
        match self {
            ModeState::Normal => None,
            ModeState::RoundRobin(state) => Some(state),
            ModeState::BestOfSeven(score) => Some(score),
        }
    }

    /// Mutable standings engine, `None` for normal play.
    pub fn progression_mut(&mut self) -> Option<&mut dyn Progression> {
        match self {
            ModeState::Normal => None,
            ModeState::RoundRobin(state) => Some(state),
            ModeState::BestOfSeven(score) => Some(score),
        }
    }

    /// Tournament payload, if any.
    pub fn tournament(&self) -> Option<&TournamentState> {
        match self {
            ModeState::RoundRobin(state) => Some(state),
            _ => None,
        }
    }

    /// Series payload, if any.
    pub fn series(&self) -> Option<&SeriesScore> {
        match self {
            ModeState::BestOfSeven(score) => Some(score),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::str::FromStr;

    #[test]
    fn test_mode_parses_kebab_case() {
        assert_eq!(GameMode::from_str("round-robin").unwrap(), GameMode::RoundRobin);
        assert_eq!(GameMode::BestOfSeven.to_string(), "best-of-seven");
        assert!(GameMode::from_str("f1").is_err());
    }

    #[test]
    fn test_fresh_state_matches_mode() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(ModeState::fresh(GameMode::Normal, 2, &mut rng).progression().is_none());

        let rr = ModeState::fresh(GameMode::RoundRobin, 4, &mut rng);
        assert_eq!(rr.mode(), GameMode::RoundRobin);
        assert_eq!(rr.tournament().unwrap().matches().len(), 12);

        let bo7 = ModeState::fresh(GameMode::BestOfSeven, 2, &mut rng);
        assert_eq!(bo7.series().unwrap().current_game_number(), 1);
    }
}
