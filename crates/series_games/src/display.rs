//! Text rendering of orchestrator events.

use crate::orchestrator::GameEvent;

/// Renders `event` for the terminal.
///
/// With `quiet`, per-move events render as `None`.
pub fn render(event: &GameEvent, quiet: bool) -> Option<String> {
    let text = match event {
        GameEvent::GameStarted { x, o, label } => match label {
            Some(label) => format!("\n== {label}: {x} (X) vs {o} (O) =="),
            None => format!("\n== {x} (X) vs {o} (O) =="),
        },
        GameEvent::TurnStarted {
            player,
            mark,
            board,
        } => {
            if quiet {
                return None;
            }
            format!("\n{board}\n{player} ({mark}) to move [1-9, q to quit]:")
        }
        GameEvent::MoveIgnored { player, reason } => {
            if quiet {
                return None;
            }
            format!("{player}: move ignored ({reason})")
        }
        GameEvent::InvalidInput { player, input } => {
            format!("{player}: '{input}' is not a cell")
        }
        GameEvent::GameOver { winner, board } => {
            let headline = match winner {
                Some(name) => format!("{name} wins!"),
                None => "It's a draw!".to_string(),
            };
            if quiet {
                headline
            } else {
                format!("\n{board}\n{headline}")
            }
        }
        GameEvent::MatchDecided { winner } => format!("{winner} takes the match"),
        GameEvent::TiebreakerStarted { competitors } => {
            format!("Tie at the top! Tiebreaker: {}", competitors.join(", "))
        }
        GameEvent::Standings { table } => format!("Standings: {}", format_table(table)),
        GameEvent::SessionComplete { winner, table } => {
            format!("\n{winner} wins the series! Final: {}", format_table(table))
        }
        GameEvent::Quit { player } => format!("{player} left the session"),
    };
    Some(text)
}

fn format_table(table: &[(String, u32)]) -> String {
    table
        .iter()
        .map(|(name, wins)| format!("{name} {wins}"))
        .collect::<Vec<_>>()
        .join(" - ")
}
