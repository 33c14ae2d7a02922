//! Command-line interface for series_games.

use clap::{Args, Parser, Subcommand};
use series_tictactoe::{GameMode, League};
use std::path::PathBuf;

/// Series Games - tic-tac-toe with tournaments and series
#[derive(Parser, Debug)]
#[command(name = "series_games")]
#[command(about = "Tic-tac-toe with round-robin tournaments and best-of-seven series", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Competitors and mode shared by `play` and `simulate`.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Mode: normal, round-robin or best-of-seven
    #[arg(short, long, default_value = "normal")]
    pub mode: GameMode,

    /// Competitor name (repeat for each competitor)
    #[arg(short, long = "name", required = true)]
    pub names: Vec<String>,

    /// Team id per competitor, in name order (see `teams`)
    #[arg(short, long = "team")]
    pub teams: Vec<String>,

    /// RNG seed for schedules and AI moves
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a session at the terminal
    Play {
        #[command(flatten)]
        session: SessionArgs,

        /// Competitor played by the random AI (repeatable)
        #[arg(long = "ai")]
        ai: Vec<String>,

        /// Pause after each game, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Start the series over with the same teams once it is decided
        #[arg(long)]
        rematch: bool,
    },

    /// Let random AIs play a whole session and print the result
    Simulate {
        #[command(flatten)]
        session: SessionArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the teams of a league
    Teams {
        /// League: formula1 (f1) or nba
        league: League,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_teams() {
        let cli = Cli::try_parse_from([
            "series_games",
            "play",
            "--mode",
            "best-of-seven",
            "-n",
            "Ada",
            "-n",
            "Grace",
            "-t",
            "celtics",
            "-t",
            "lakers",
            "--ai",
            "Grace",
        ])
        .unwrap();
        match cli.command {
            Command::Play { session, ai, .. } => {
                assert_eq!(session.mode, GameMode::BestOfSeven);
                assert_eq!(session.names, vec!["Ada", "Grace"]);
                assert_eq!(session.teams, vec!["celtics", "lakers"]);
                assert_eq!(ai, vec!["Grace"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_names_required() {
        assert!(Cli::try_parse_from(["series_games", "simulate"]).is_err());
    }

    #[test]
    fn test_teams_league_alias() {
        let cli = Cli::try_parse_from(["series_games", "teams", "f1"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Teams {
                league: League::Formula1
            }
        ));
    }
}
