//! Series Games - terminal front end for `series_tictactoe`.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with CLI overrides
//! - **Players**: humans at the keyboard and random AIs
//! - **Orchestrator**: runs a session, pausing between games via
//!   a cancelable [`AdvanceTimer`]
//! - **Display**: renders orchestrator events as text

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod display;
mod orchestrator;
mod players;
mod report;
mod timer;

pub use cli::{Cli, Command, SessionArgs};
pub use config::{ArenaConfig, ConfigError};
pub use display::render;
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{HumanPlayer, Player, RandomAi, SharedInput, Turn, spawn_stdin_reader};
pub use report::{CompetitorReport, SessionReport};
pub use timer::AdvanceTimer;
