//! Tic-tac-toe with tournament overlays.
//!
//! Pure game logic with no I/O:
//!
//! - **Rules**: win/draw evaluation over a 3x3 board
//! - **Schedule**: round-robin and tiebreaker match generation
//! - **Progression**: best-of-3 tournament matches and best-of-7 series
//! - **Session**: the controller that ties a board to a mode
//!
//! # Example
//!
//! ```
//! use series_tictactoe::{GameMode, GameSession, Progress, SessionPhase};
//!
//! let mut session = GameSession::start(
//!     vec!["Ada".to_string(), "Grace".to_string()],
//!     GameMode::BestOfSeven,
//! )?;
//! session.select_teams(vec!["celtics".to_string(), "lakers".to_string()])?;
//!
//! // X takes the top row.
//! for cell in [0, 3, 1, 4, 2] {
//!     session.place_mark(cell);
//! }
//! assert_eq!(session.advance(), Some(Progress::Continue));
//! assert_eq!(session.phase(), &SessionPhase::Playing);
//! assert_eq!(session.state().mode().series().unwrap().wins_a(), 1);
//! # Ok::<(), series_tictactoe::SetupError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod mode;
mod position;
mod progression;
pub mod rules;
mod schedule;
mod session;
mod teams;
mod types;

pub use error::SetupError;
pub use mode::{GameMode, ModeState};
pub use position::Position;
pub use progression::{
    FinalStandings, Progress, Progression, SERIES_WINS_NEEDED, SeriesScore, TournamentState,
};
pub use rules::evaluate;
pub use schedule::{
    CompetitorIndex, MATCH_WINS_NEEDED, Match, generate_round_robin, generate_tiebreaker,
};
pub use session::{GameSession, IgnoreReason, Placement, SessionPhase, SessionState};
pub use teams::{Conference, League, Team};
pub use types::{Board, GameResult, Mark, Square};
