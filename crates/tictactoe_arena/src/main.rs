//! tictactoe - play games or query the minimax engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_arena::{AgentKind, Arena, ArenaConfig};
use tictactoe_core::{Board, Mark, Pruning, SearchEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            player_a,
            player_b,
            games,
            seed,
        } => run_play(&config, player_a, player_b, games, seed),
        Command::Suggest {
            board,
            mark,
            no_pruning,
            json,
        } => run_suggest(&board, mark, no_pruning, json),
    }
}

/// Logs go to stderr so game output and JSON stay clean on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,tictactoe=info,tictactoe_arena=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run a series of games
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &Path,
    player_a: Option<AgentKind>,
    player_b: Option<AgentKind>,
    games: Option<u32>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = ArenaConfig::load_or_default(config_path)?;
    if let Some(kind) = player_a {
        config = config.with_player_a_kind(kind);
    }
    if let Some(kind) = player_b {
        config = config.with_player_b_kind(kind);
    }
    if let Some(games) = games {
        config = config.with_games(games)?;
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let (seed_a, seed_b) = config.seat_seeds();
    let mut arena = Arena::new(
        config.player_a().build(seed_a),
        config.player_b().build(seed_b),
    );
    if config.should_show_board() {
        arena = arena.with_display(std::io::stdout());
    }

    info!(games = config.games(), "Starting series");
    let tally = arena.play_series(*config.games())?;

    let (name_a, name_b) = arena.names();
    println!("{}", tally.summary(name_a, name_b));
    Ok(())
}

/// Print the best move for a position
#[instrument]
fn run_suggest(layout: &str, mark: Option<char>, no_pruning: bool, json: bool) -> Result<()> {
    let board: Board = layout.parse()?;
    let mover = match mark.map(|c| c.to_ascii_uppercase()) {
        None => board.to_move(Mark::X),
        Some('X') => Mark::X,
        Some('O') => Mark::O,
        Some(other) => anyhow::bail!("Unknown mark {other:?}, expected X or O"),
    };

    let report = SearchEngine::analyze(&board, mover, mover.opponent(), Pruning::from(!no_pruning))
        .with_context(|| format!("No move to suggest for\n{board}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{board}\n");
        println!(
            "{mover} should play {} ({}), score {} after {} nodes ({})",
            report.best_move(),
            report.best_move().label(),
            report.score(),
            report.nodes(),
            report.pruning()
        );
    }
    Ok(())
}
