//! Game session controller.
//!
//! A [`GameSession`] owns the board, the turn, the competitors and the
//! mode-specific standings. Callers drive it with four operations:
//!
//! 1. [`GameSession::select_teams`] (multi-game modes only) before play,
//! 2. [`GameSession::place_mark`] for every click,
//! 3. [`GameSession::advance`] once a finished game has been shown,
//! 4. [`GameSession::restart`] or [`GameSession::end`] when the session is
//!    over.
//!
//! Illegal moves are silent no-ops, never errors.

use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use crate::error::SetupError;
use crate::mode::{GameMode, ModeState};
use crate::position::Position;
use crate::progression::{FinalStandings, Progress};
use crate::rules::evaluate;
use crate::schedule::CompetitorIndex;
use crate::teams::League;
use crate::types::{Board, GameResult, Mark};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for every competitor to pick a team.
    AwaitingTeams,
    /// A game is accepting moves.
    Playing,
    /// The game ended; waiting for [`GameSession::advance`].
    GameOver(GameResult),
    /// The series or tournament is decided.
    Complete(FinalStandings),
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum IgnoreReason {
    /// No game is accepting moves.
    NotPlaying,
    /// Cell index past 8.
    OutOfRange,
    /// Cell already holds a mark.
    Occupied,
}

/// Outcome of [`GameSession::place_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// Mark placed; the game now evaluates to the given result.
    Placed(GameResult),
}

/// Snapshot of a session handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SessionState {
    /// Current board.
    board: Board,
    /// Mark to move next.
    current_turn: Mark,
    /// Evaluation of the current board.
    last_result: GameResult,
    /// Competitor names, in the order supplied at start.
    competitor_names: Vec<String>,
    /// Team ids parallel to the names, empty until selected.
    competitor_teams: Vec<String>,
    /// Mode and its standings.
    mode: ModeState,
    /// Lifecycle phase.
    phase: SessionPhase,
}

/// One tic-tac-toe session: a single game stream, a series, or a
/// tournament.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    rng: StdRng,
}

impl GameSession {
    /// Starts a session seeded from OS entropy.
    pub fn start(names: Vec<String>, mode: GameMode) -> Result<Self, SetupError> {
        Self::start_with_rng(names, mode, StdRng::from_entropy())
    }

    /// Starts a session using `rng` for schedule shuffling.
    ///
    /// Normal and best-of-seven sessions take exactly two competitors; a
    /// round robin takes between two and the number of teams in its league.
    #[instrument(skip(rng))]
    pub fn start_with_rng(
        names: Vec<String>,
        mode: GameMode,
        mut rng: StdRng,
    ) -> Result<Self, SetupError> {
        validate_names(&names, mode).inspect_err(|e| warn!(error = %e, "Rejected session"))?;

        let phase = match mode.league() {
            Some(_) => SessionPhase::AwaitingTeams,
            None => SessionPhase::Playing,
        };
        let mode_state = ModeState::fresh(mode, names.len(), &mut rng);

        info!(%mode, competitors = names.len(), "Session started");
        Ok(Self {
            state: SessionState {
                board: Board::new(),
                current_turn: Mark::X,
                last_result: GameResult::InProgress,
                competitor_names: names,
                competitor_teams: Vec::new(),
                mode: mode_state,
                phase,
            },
            rng,
        })
    }

    /// Current snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> &SessionPhase {
        &self.state.phase
    }

    /// Session mode.
    pub fn mode(&self) -> GameMode {
        self.state.mode.mode()
    }

    /// Competitors holding X and O in the current game.
    ///
    /// `None` once the session is complete.
    pub fn pairing(&self) -> Option<(CompetitorIndex, CompetitorIndex)> {
        match self.state.mode.progression() {
            Some(progression) => progression.current_pairing(),
            None => Some((0, 1)),
        }
    }

    /// Competitor playing `mark` in the current game.
    pub fn competitor_for(&self, mark: Mark) -> Option<CompetitorIndex> {
        self.pairing().map(|(x, o)| match mark {
            Mark::X => x,
            Mark::O => o,
        })
    }

    /// Name of competitor `index`.
    pub fn name_of(&self, index: CompetitorIndex) -> Option<&str> {
        self.state.competitor_names.get(index).map(String::as_str)
    }

    /// Assigns one team per competitor, in competitor order.
    ///
    /// Ids must belong to the mode's league and be pairwise distinct. A
    /// session waiting for teams starts playing; otherwise only the team
    /// labels change.
    #[instrument(skip(self))]
    pub fn select_teams(&mut self, team_ids: Vec<String>) -> Result<&SessionState, SetupError> {
        let mode = self.mode();
        let league = mode.league().ok_or(SetupError::NoTeams(mode))?;
        validate_teams(&team_ids, self.state.competitor_names.len(), league)
            .inspect_err(|e| warn!(error = %e, "Rejected team selection"))?;

        info!(teams = ?team_ids, "Teams selected");
        self.state.competitor_teams = team_ids;
        if self.state.phase == SessionPhase::AwaitingTeams {
            self.state.phase = SessionPhase::Playing;
        }
        Ok(&self.state)
    }

    /// Places the current turn's mark on `cell` (0-8).
    ///
    /// Ignored when no game is accepting moves, the index is out of range
    /// or the cell is taken. Otherwise the turn passes to the other mark and
    /// a finished game moves the session to [`SessionPhase::GameOver`].
    #[instrument(skip(self), fields(turn = %self.state.current_turn))]
    pub fn place_mark(&mut self, cell: usize) -> Placement {
        if self.state.phase != SessionPhase::Playing {
            debug!(phase = ?self.state.phase, "Move ignored, not playing");
            return Placement::Ignored(IgnoreReason::NotPlaying);
        }
        let Some(pos) = Position::from_index(cell) else {
            debug!("Move ignored, cell out of range");
            return Placement::Ignored(IgnoreReason::OutOfRange);
        };
        if !self.state.board.place(pos, self.state.current_turn) {
            debug!(%pos, "Move ignored, cell occupied");
            return Placement::Ignored(IgnoreReason::Occupied);
        }

        let result = evaluate(&self.state.board);
        self.state.current_turn = self.state.current_turn.opponent();
        self.state.last_result = result;
        if result.is_terminal() {
            info!(?result, "Game over");
            self.state.phase = SessionPhase::GameOver(result);
        }
        Placement::Placed(result)
    }

    /// Hands the finished game to the standings and sets up the next game.
    ///
    /// Returns `None` unless the session is in [`SessionPhase::GameOver`].
    /// Normal sessions report [`Progress::Continue`].
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Option<Progress> {
        let SessionPhase::GameOver(result) = self.state.phase else {
            debug!(phase = ?self.state.phase, "Nothing to advance");
            return None;
        };

        let progress = match self.state.mode.progression_mut() {
            Some(progression) => progression.record(result),
            None => Progress::Continue,
        };
        self.reset_board();

        let standings = self
            .state
            .mode
            .progression()
            .and_then(|progression| progression.final_standings());
        self.state.phase = match standings {
            Some(standings) => {
                info!(winner = standings.winner, "Session complete");
                SessionPhase::Complete(standings)
            }
            None => SessionPhase::Playing,
        };
        debug!(?progress, "Advanced");
        Some(progress)
    }

    /// Starts the series or tournament over.
    ///
    /// With `same_competitors` the names and teams stay; otherwise the team
    /// picks are cleared and must be selected again. Standings are always
    /// regenerated.
    #[instrument(skip(self))]
    pub fn restart(&mut self, same_competitors: bool) -> &SessionState {
        let mode = self.mode();
        self.reset_board();
        self.state.mode = ModeState::fresh(mode, self.state.competitor_names.len(), &mut self.rng);
        if !same_competitors {
            self.state.competitor_teams.clear();
        }
        self.state.phase = match mode.league() {
            Some(_) if self.state.competitor_teams.is_empty() => SessionPhase::AwaitingTeams,
            _ => SessionPhase::Playing,
        };
        info!(%mode, same_competitors, "Session restarted");
        &self.state
    }

    /// Ends the session and returns to mode selection.
    #[instrument(skip(self))]
    pub fn end(self) {
        info!(mode = %self.mode(), "Session ended");
    }

    fn reset_board(&mut self) {
        self.state.board = Board::new();
        self.state.current_turn = Mark::X;
        self.state.last_result = GameResult::InProgress;
    }
}

fn competitor_limits(mode: GameMode) -> (usize, usize) {
    match mode {
        GameMode::Normal | GameMode::BestOfSeven => (2, 2),
        GameMode::RoundRobin => (2, League::Formula1.teams().len()),
    }
}

fn validate_names(names: &[String], mode: GameMode) -> Result<(), SetupError> {
    let (min, max) = competitor_limits(mode);
    let count = names.len();
    if count < min {
        return Err(SetupError::TooFewCompetitors { mode, min, count });
    }
    if count > max {
        return Err(SetupError::TooManyCompetitors { mode, max, count });
    }
    if let Some(blank) = names.iter().position(|n| n.trim().is_empty()) {
        return Err(SetupError::BlankName(blank));
    }
    Ok(())
}

fn validate_teams(team_ids: &[String], competitors: usize, league: League) -> Result<(), SetupError> {
    if team_ids.len() != competitors {
        return Err(SetupError::TeamCount {
            expected: competitors,
            got: team_ids.len(),
        });
    }
    let mut seen = HashSet::new();
    for id in team_ids {
        if league.find(id).is_none() {
            return Err(SetupError::UnknownTeam(id.clone()));
        }
        if !seen.insert(id.as_str()) {
            return Err(SetupError::DuplicateTeam(id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn normal() -> GameSession {
        GameSession::start_with_rng(
            names(&["Ada", "Grace"]),
            GameMode::Normal,
            StdRng::seed_from_u64(5),
        )
        .unwrap()
    }

    #[test]
    fn test_normal_session_plays_immediately() {
        let session = normal();
        assert_eq!(session.phase(), &SessionPhase::Playing);
        assert_eq!(session.pairing(), Some((0, 1)));
    }

    #[test]
    fn test_turn_alternates() {
        let mut session = normal();
        assert_eq!(session.place_mark(4), Placement::Placed(GameResult::InProgress));
        assert_eq!(*session.state().current_turn(), Mark::O);
        session.place_mark(0);
        assert_eq!(*session.state().current_turn(), Mark::X);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut session = normal();
        assert_eq!(
            session.place_mark(9),
            Placement::Ignored(IgnoreReason::OutOfRange)
        );
        assert_eq!(*session.state().current_turn(), Mark::X);
    }

    #[test]
    fn test_moves_after_game_over_are_ignored() {
        let mut session = normal();
        for cell in [0, 3, 1, 4, 2] {
            session.place_mark(cell);
        }
        assert_eq!(
            session.phase(),
            &SessionPhase::GameOver(GameResult::Won(Mark::X))
        );
        let before = session.state().clone();
        assert_eq!(
            session.place_mark(8),
            Placement::Ignored(IgnoreReason::NotPlaying)
        );
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_advance_without_game_over_is_none() {
        let mut session = normal();
        assert_eq!(session.advance(), None);
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = GameSession::start(names(&["Ada", "  "]), GameMode::Normal).unwrap_err();
        assert_eq!(err, SetupError::BlankName(1));
    }

    #[test]
    fn test_competitor_limits() {
        assert!(matches!(
            GameSession::start(names(&["Solo"]), GameMode::RoundRobin),
            Err(SetupError::TooFewCompetitors { min: 2, count: 1, .. })
        ));
        assert!(matches!(
            GameSession::start(names(&["A", "B", "C"]), GameMode::BestOfSeven),
            Err(SetupError::TooManyCompetitors { max: 2, count: 3, .. })
        ));
    }

    #[test]
    fn test_normal_mode_has_no_teams() {
        let mut session = normal();
        assert_eq!(
            session.select_teams(names(&["lakers", "heat"])).unwrap_err(),
            SetupError::NoTeams(GameMode::Normal)
        );
    }
}
