//! Session setup errors.

use derive_more::{Display, Error};

use crate::mode::GameMode;

/// Rejected session setup or team selection.
///
/// Moves are never errors: an illegal move is ignored by the session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Fewer competitors than the mode allows.
    #[display("{mode} needs at least {min} competitors, got {count}")]
    TooFewCompetitors {
        /// Requested mode.
        mode: GameMode,
        /// Minimum for the mode.
        min: usize,
        /// Names supplied.
        count: usize,
    },

    /// More competitors than the mode allows.
    #[display("{mode} takes at most {max} competitors, got {count}")]
    TooManyCompetitors {
        /// Requested mode.
        mode: GameMode,
        /// Maximum for the mode.
        max: usize,
        /// Names supplied.
        count: usize,
    },

    /// A competitor name is empty or whitespace.
    #[display("Competitor {_0} has a blank name")]
    BlankName(#[error(not(source))] usize),

    /// The mode plays without teams.
    #[display("{_0} mode does not use teams")]
    NoTeams(#[error(not(source))] GameMode),

    /// Team count differs from competitor count.
    #[display("Expected {expected} teams, got {got}")]
    TeamCount {
        /// Competitors in the session.
        expected: usize,
        /// Team ids supplied.
        got: usize,
    },

    /// Team id not in the mode's league.
    #[display("Unknown team '{_0}'")]
    UnknownTeam(#[error(not(source))] String),

    /// Two competitors picked the same team.
    #[display("Team '{_0}' was picked twice")]
    DuplicateTeam(#[error(not(source))] String),
}
