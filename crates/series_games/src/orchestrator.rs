//! Drives a session between players.

use crate::players::{Player, Turn};
use crate::timer::AdvanceTimer;
use anyhow::{Context, Result};
use series_tictactoe::{
    CompetitorIndex, FinalStandings, GameMode, GameResult, GameSession, IgnoreReason, Mark,
    ModeState, Placement, Progress, SessionPhase,
};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, info, instrument};

/// Messages sent from the orchestrator to the display.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new game begins.
    GameStarted {
        /// Competitor holding X.
        x: String,
        /// Competitor holding O.
        o: String,
        /// Where the game sits in the session, e.g. "Game 3".
        label: Option<String>,
    },
    /// A player is to move.
    TurnStarted {
        /// Player to move.
        player: String,
        /// Their mark.
        mark: Mark,
        /// Board as displayed.
        board: String,
    },
    /// A move was ignored by the session.
    MoveIgnored {
        /// Player who tried.
        player: String,
        /// Why it was ignored.
        reason: IgnoreReason,
    },
    /// Input that names no cell.
    InvalidInput {
        /// Player who typed it.
        player: String,
        /// What was typed.
        input: String,
    },
    /// A game finished.
    GameOver {
        /// Winner's name, `None` for a draw.
        winner: Option<String>,
        /// Final board.
        board: String,
    },
    /// A tournament match was decided.
    MatchDecided {
        /// Match winner.
        winner: String,
    },
    /// A tiebreaker round started.
    TiebreakerStarted {
        /// Tied competitors.
        competitors: Vec<String>,
    },
    /// Standings after a game in a multi-game mode.
    Standings {
        /// Name and game wins per competitor.
        table: Vec<(String, u32)>,
    },
    /// The series or tournament is decided.
    SessionComplete {
        /// Overall winner.
        winner: String,
        /// Name and game wins per competitor.
        table: Vec<(String, u32)>,
    },
    /// A player left.
    Quit {
        /// Player who left.
        player: String,
    },
}

/// Runs a [`GameSession`] to completion with one [`Player`] per competitor.
pub struct Orchestrator {
    session: GameSession,
    players: Vec<Box<dyn Player>>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    advance_delay: Duration,
}

impl Orchestrator {
    /// Creates an orchestrator. `players[i]` plays competitor `i`.
    pub fn new(
        session: GameSession,
        players: Vec<Box<dyn Player>>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
        advance_delay: Duration,
    ) -> Self {
        Self {
            session,
            players,
            event_tx,
            advance_delay,
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Starts the series or tournament over, see [`GameSession::restart`].
    pub fn restart(&mut self, same_competitors: bool) {
        self.session.restart(same_competitors);
    }

    /// Ends the session and closes the event stream.
    pub fn end(self) {
        self.session.end();
    }

    /// Plays until the session is decided, a player quits, or (in normal
    /// mode) one game has been played.
    ///
    /// Returns the final standings of a decided series or tournament.
    #[instrument(skip(self), fields(mode = %self.session.mode()))]
    pub async fn run(&mut self) -> Result<Option<FinalStandings>> {
        info!("Starting session orchestration");
        if self.players.len() != self.session.state().competitor_names().len() {
            anyhow::bail!(
                "{} players for {} competitors",
                self.players.len(),
                self.session.state().competitor_names().len()
            );
        }
        if self.session.phase() == &SessionPhase::Playing {
            self.announce_game()?;
        }

        loop {
            match self.session.phase().clone() {
                SessionPhase::AwaitingTeams => {
                    anyhow::bail!("Teams must be selected before play");
                }
                SessionPhase::Complete(standings) => {
                    self.event_tx.send(GameEvent::SessionComplete {
                        winner: self.name(standings.winner),
                        table: self.table(&standings.wins),
                    })?;
                    return Ok(Some(standings));
                }
                SessionPhase::GameOver(result) => {
                    if !self.finish_game(result).await? {
                        return Ok(None);
                    }
                    if self.session.mode() == GameMode::Normal {
                        return Ok(None);
                    }
                    if self.session.phase() == &SessionPhase::Playing {
                        self.announce_game()?;
                    }
                }
                SessionPhase::Playing => {
                    if !self.play_turn().await? {
                        return Ok(None);
                    }
                }
            }
        }
    }

    /// Asks the player on turn for a move. Returns `false` if they quit.
    ///
    /// Turn events carry the player's own name; results and standings use
    /// the competitor names held by the session.
    async fn play_turn(&mut self) -> Result<bool> {
        let mark = *self.session.state().current_turn();
        let competitor = self
            .session
            .competitor_for(mark)
            .context("No competitor holds the current mark")?;
        let board = self.session.state().board().clone();
        let player = self
            .players
            .get_mut(competitor)
            .context("No player seated for competitor")?;
        let player_name = player.name().to_string();

        self.event_tx.send(GameEvent::TurnStarted {
            player: player_name.clone(),
            mark,
            board: board.display(),
        })?;

        debug!(player = %player_name, "Waiting for move");
        let turn = player.get_move(&board, mark).await?;
        match turn {
            Turn::Quit => {
                info!(player = %player_name, "Player quit");
                self.event_tx.send(GameEvent::Quit {
                    player: player_name,
                })?;
                return Ok(false);
            }
            Turn::Invalid(input) => {
                self.event_tx.send(GameEvent::InvalidInput {
                    player: player_name,
                    input,
                })?;
            }
            Turn::Place(pos) => {
                if let Placement::Ignored(reason) = self.session.place_mark(pos.to_index()) {
                    self.event_tx.send(GameEvent::MoveIgnored {
                        player: player_name,
                        reason,
                    })?;
                }
            }
        }
        Ok(true)
    }

    /// Shows a finished game, waits out the display delay and advances.
    ///
    /// Returns `false` if the advance was cancelled.
    async fn finish_game(&mut self, result: GameResult) -> Result<bool> {
        let winner = result
            .winner()
            .and_then(|mark| self.session.competitor_for(mark))
            .map(|c| self.name(c));
        self.event_tx.send(GameEvent::GameOver {
            winner,
            board: self.session.state().board().display(),
        })?;

        let timer = AdvanceTimer::schedule(self.advance_delay, result);
        if timer.wait().await.is_none() {
            debug!("Advance cancelled");
            return Ok(false);
        }

        let Some(progress) = self.session.advance() else {
            return Ok(true);
        };
        match progress {
            Progress::MatchDecided { winner } => {
                self.event_tx.send(GameEvent::MatchDecided {
                    winner: self.name(winner),
                })?;
            }
            Progress::TiebreakerStarted(tied) => {
                self.event_tx.send(GameEvent::TiebreakerStarted {
                    competitors: tied.iter().map(|&c| self.name(c)).collect(),
                })?;
            }
            Progress::Continue | Progress::Complete { .. } => {}
        }
        if let Some(wins) = self.current_wins() {
            self.event_tx.send(GameEvent::Standings {
                table: self.table(&wins),
            })?;
        }
        Ok(true)
    }

    fn announce_game(&self) -> Result<()> {
        let Some((x, o)) = self.session.pairing() else {
            return Ok(());
        };
        let label = match self.session.state().mode() {
            ModeState::Normal => None,
            ModeState::BestOfSeven(series) => Some(format!("Game {}", series.current_game_number())),
            ModeState::RoundRobin(tournament) => Some(format!(
                "{} {} of {}",
                if tournament.is_tiebreaker() {
                    "Tiebreaker match"
                } else {
                    "Match"
                },
                tournament.current_match_index() + 1,
                tournament.matches().len()
            )),
        };
        self.event_tx.send(GameEvent::GameStarted {
            x: self.name(x),
            o: self.name(o),
            label,
        })?;
        Ok(())
    }

    fn current_wins(&self) -> Option<Vec<u32>> {
        match self.session.state().mode() {
            ModeState::Normal => None,
            ModeState::BestOfSeven(series) => Some(vec![series.wins_a(), series.wins_b()]),
            ModeState::RoundRobin(tournament) => Some(tournament.wins_per_competitor().to_vec()),
        }
    }

    fn name(&self, competitor: CompetitorIndex) -> String {
        self.session
            .name_of(competitor)
            .unwrap_or("?")
            .to_string()
    }

    fn table(&self, wins: &[u32]) -> Vec<(String, u32)> {
        wins.iter()
            .enumerate()
            .map(|(i, &w)| (self.name(i), w))
            .collect()
    }
}
