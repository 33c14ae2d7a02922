//! Series Games - unified CLI
//!
//! Interactive play, AI-only simulation and team listings.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use series_games::{
    ArenaConfig, Cli, Command, GameEvent, HumanPlayer, Orchestrator, Player, RandomAi,
    SessionArgs, SessionReport, render, spawn_stdin_reader,
};
use series_tictactoe::{FinalStandings, GameSession, League};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ArenaConfig::load(cli.config.as_deref())?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play {
            session,
            ai,
            delay_ms,
            rematch,
        } => {
            let config = match delay_ms {
                Some(ms) => config.with_advance_delay_ms(ms),
                None => config,
            };
            run_play(config, session, ai, rematch).await
        }
        Command::Simulate { session, json } => run_simulate(config, session, json).await,
        Command::Teams { league } => {
            print_teams(league);
            Ok(())
        }
    }
}

/// Logs to stderr so the board on stdout stays readable.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds and validates a session from command-line arguments.
#[instrument(skip(config))]
fn start_session(config: &ArenaConfig, args: &SessionArgs) -> Result<(GameSession, u64)> {
    let seed = args
        .seed
        .or(*config.seed())
        .unwrap_or_else(rand::random::<u64>);
    let mut session =
        GameSession::start_with_rng(args.names.clone(), args.mode, StdRng::seed_from_u64(seed))?;

    if let Some(league) = args.mode.league() {
        if args.teams.is_empty() {
            anyhow::bail!(
                "{} mode needs one --team per competitor (see `series_games teams {}`)",
                args.mode,
                league
            );
        }
        session.select_teams(args.teams.clone())?;
    } else if !args.teams.is_empty() {
        warn!("Ignoring --team in normal mode");
    }
    Ok((session, seed))
}

/// How much of the event stream reaches stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    /// Every event, boards included.
    Full,
    /// Game results and standings only.
    Results,
    /// Nothing; stdout is reserved for the final report.
    Silent,
}

/// Prints events until the orchestrator hangs up.
fn spawn_printer(mut rx: mpsc::UnboundedReceiver<GameEvent>, verbosity: Verbosity) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if verbosity == Verbosity::Silent {
                continue;
            }
            if let Some(text) = render(&event, verbosity == Verbosity::Results) {
                println!("{}", text);
            }
        }
    })
}

/// Runs an orchestrator until it finishes or Ctrl-C tears the session down.
async fn drive(orchestrator: &mut Orchestrator) -> Result<Option<FinalStandings>> {
    tokio::select! {
        outcome = orchestrator.run() => outcome,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, ending session");
            Ok(None)
        }
    }
}

/// Interactive session at the terminal.
#[instrument(skip(config))]
async fn run_play(
    config: ArenaConfig,
    args: SessionArgs,
    ai: Vec<String>,
    rematch: bool,
) -> Result<()> {
    let (session, seed) = start_session(&config, &args)?;
    let input = spawn_stdin_reader();

    let players: Vec<Box<dyn Player>> = args
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| -> Box<dyn Player> {
            if ai.contains(name) {
                Box::new(
                    RandomAi::new(name.clone(), seed.wrapping_add(i as u64 + 1))
                        .with_think_time(Duration::from_millis(400)),
                )
            } else {
                Box::new(HumanPlayer::new(name.clone(), input.clone()))
            }
        })
        .collect();

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let printer = spawn_printer(event_rx, Verbosity::Full);
    let mut orchestrator = Orchestrator::new(
        session,
        players,
        event_tx,
        Duration::from_millis(*config.advance_delay_ms()),
    );

    let mut standings = drive(&mut orchestrator).await?;
    if rematch && standings.is_some() {
        info!("Rematch with the same teams");
        orchestrator.restart(true);
        standings = drive(&mut orchestrator).await?;
    }

    let report = standings.map(|s| SessionReport::new(orchestrator.session(), &s));
    orchestrator.end();
    printer.await.context("Printer task failed")?;
    if let Some(report) = report {
        print!("{}", report.render());
    }
    Ok(())
}

/// AI-only session with no display delay.
#[instrument(skip(config))]
async fn run_simulate(config: ArenaConfig, args: SessionArgs, json: bool) -> Result<()> {
    let (session, seed) = start_session(&config, &args)?;
    info!(seed, "Simulating session");

    let players: Vec<Box<dyn Player>> = args
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| -> Box<dyn Player> {
            Box::new(RandomAi::new(name.clone(), seed.wrapping_add(i as u64 + 1)))
        })
        .collect();

    let verbosity = if json {
        Verbosity::Silent
    } else {
        Verbosity::Results
    };
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let printer = spawn_printer(event_rx, verbosity);
    let mut orchestrator = Orchestrator::new(session, players, event_tx, Duration::ZERO);
    let standings = drive(&mut orchestrator).await?;

    let report = standings.map(|s| SessionReport::new(orchestrator.session(), &s));
    orchestrator.end();
    printer.await.context("Printer task failed")?;
    match report {
        Some(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
        Some(report) => print!("{}", report.render()),
        None => info!("Session ended without a result"),
    }
    Ok(())
}

fn print_teams(league: League) {
    println!("{} teams:", league);
    for team in league.teams() {
        match team.conference() {
            Some(conference) => println!("  {:<14} {} ({})", team.id(), team.name(), conference),
            None => println!("  {:<14} {}", team.id(), team.name()),
        }
    }
}
